// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Turns intersection ratios reported by the browser into visibility edges

use tracing::debug;

/// Edge-triggered visibility from intersection ratios
#[derive(Debug, Clone)]
pub struct VisibilityGate {
    threshold: f64,
    visible: bool,
}

impl VisibilityGate {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Feed an intersection ratio (0.0..=1.0).
    ///
    /// Returns the new state only when it differs from the last one.
    pub fn observe(&mut self, ratio: f64) -> Option<bool> {
        let visible = ratio.is_finite() && ratio >= self.threshold;
        self.set(visible)
    }

    /// Force a state, e.g. when the client reports visibility directly
    pub fn set(&mut self, visible: bool) -> Option<bool> {
        if visible == self.visible {
            return None;
        }
        debug!("Visibility changed: {} -> {}", self.visible, visible);
        self.visible = visible;
        Some(visible)
    }
}
