// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Landing page variants
//!
//! Variants share the same sections and the same notification stack;
//! they differ in colours, fonts, hero copy and tick pacing.

use serde::Serialize;

/// Colour and font palette
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Theme {
    pub navy: &'static str,
    pub teal: &'static str,
    pub teal_light: &'static str,
    pub teal_soft: &'static str,
    pub teal_pale: &'static str,
    pub coral: &'static str,
    pub page_background: &'static str,
    pub display_font: &'static str,
    pub body_font: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Variant {
    pub name: &'static str,
    pub label: &'static str,
    pub tagline: &'static str,
    /// Headline lines, rendered with line breaks
    pub headline: [&'static str; 3],
    pub theme: Theme,
    /// Replaces the configured tick interval when set
    pub tick_interval_ms: Option<u64>,
}

const INVESTIGATE_THEME: Theme = Theme {
    navy: "#1a1a2e",
    teal: "#0d9488",
    teal_light: "#5eead4",
    teal_soft: "#ccfbf1",
    teal_pale: "#f0fdfa",
    coral: "#f97362",
    page_background: "#f8fafc",
    display_font: "'PP Editorial New', Georgia, serif",
    body_font: "'Source Sans 3', -apple-system, 'Segoe UI', sans-serif",
};

pub const VARIANTS: [Variant; 3] = [
    Variant {
        name: "investigate",
        label: "Investigate",
        tagline: "Document Intelligence Platform",
        headline: ["Every document.", "Every connection.", "Never forgotten."],
        theme: INVESTIGATE_THEME,
        tick_interval_ms: None,
    },
    Variant {
        name: "newsroom",
        label: "Newsroom",
        tagline: "For Investigative Journalists",
        headline: ["Follow the money.", "Follow the names.", "Never lose the thread."],
        theme: Theme {
            navy: "#111827",
            teal: "#b45309",
            teal_light: "#fcd34d",
            teal_soft: "#fef3c7",
            teal_pale: "#fffbeb",
            coral: "#dc2626",
            page_background: "#faf7f2",
            display_font: "'PP Editorial New', 'Times New Roman', serif",
            body_font: "Georgia, 'Source Sans 3', serif",
        },
        tick_interval_ms: Some(3000),
    },
    Variant {
        name: "minimal",
        label: "Minimal",
        tagline: "AI Document Scanner",
        headline: ["Upload.", "Extract.", "Connect."],
        theme: Theme {
            page_background: "#ffffff",
            display_font: "'Source Sans 3', -apple-system, sans-serif",
            ..INVESTIGATE_THEME
        },
        tick_interval_ms: Some(2000),
    },
];

impl Variant {
    pub fn find(name: &str) -> Option<&'static Variant> {
        VARIANTS.iter().find(|v| v.name.eq_ignore_ascii_case(name))
    }

    pub fn all() -> &'static [Variant] {
        &VARIANTS
    }
}
