// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Landing page composition and rendering

pub mod content;
pub mod graph;
pub mod templates;
pub mod variants;

use chrono::{Datelike, Local};
use minijinja::{context, Environment};
use serde::Serialize;
use tracing::debug;

use crate::animator::style::STACK_TRANSITION;
use crate::config::AppConfig;
use crate::Result;
use content::*;
use graph::NetworkGraph;
use variants::Variant;

/// WebSocket route the entity-discovery panel connects to
pub const SOCKET_PATH: &str = "/ws/entity-discovery";

/// Settings handed to the browser script as JSON
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientConfig<'a> {
    socket_path: &'a str,
    variant: &'a str,
    visibility_threshold: f64,
    transition: &'a str,
    nav_scroll_threshold: u32,
}

/// Renders landing pages from the embedded templates
pub struct SiteRenderer {
    env: Environment<'static>,
    graph: NetworkGraph,
}

impl SiteRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("layout.html", templates::LAYOUT)?;
        env.add_template("page.html", templates::PAGE)?;
        env.add_template("graph.html", templates::GRAPH)?;

        Ok(Self {
            env,
            graph: NetworkGraph::default(),
        })
    }

    /// Render the full page for a variant
    pub fn render(&self, variant: &Variant, config: &AppConfig) -> Result<String> {
        let client_config = serde_json::to_string(&ClientConfig {
            socket_path: SOCKET_PATH,
            variant: variant.name,
            visibility_threshold: config.animator.visibility_threshold,
            transition: STACK_TRANSITION,
            nav_scroll_threshold: config.site.nav_scroll_threshold_px,
        })?
        // keep the JSON from closing its script element
        .replace("</", "<\\/");

        let template = self.env.get_template("page.html")?;
        let html = template.render(context! {
            meta => METADATA,
            variant => variant,
            hero_video => HERO_VIDEO,
            hero_subtitle => HERO_SUBTITLE,
            problem => PROBLEM,
            upload => UPLOAD_FEATURE,
            mapping => MAPPING_FEATURE,
            language => LANGUAGE_FEATURE,
            discovery => DISCOVERY_FEATURE,
            persistence => PERSISTENCE_FEATURE,
            aliases => LANGUAGE_ALIASES,
            comparisons => COMPARISONS,
            steps => STEPS,
            screenshots => SCREENSHOTS,
            partners => PARTNERS,
            footer_blurb => FOOTER_BLURB,
            footer_motto => FOOTER_MOTTO,
            demo_url => &config.site.demo_url,
            graph => &self.graph,
            client_config => client_config,
            client_script => templates::CLIENT_SCRIPT,
            year => Local::now().year(),
        })?;

        debug!("Rendered variant {} ({} bytes)", variant.name, html.len());
        Ok(html)
    }

    /// Render a variant by name
    pub fn render_named(&self, name: &str, config: &AppConfig) -> Result<String> {
        let variant = Variant::find(name)
            .ok_or_else(|| crate::SiteError::UnknownVariant(name.to_string()))?;
        self.render(variant, config)
    }
}

/// Standalone HTML error page; `message` is auto-escaped
pub fn render_error_page(
    status: u16,
    reason: &str,
    message: &str,
) -> std::result::Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("error.html", templates::ERROR_PAGE)?;
    env.get_template("error.html")?
        .render(context! { status => status, reason => reason, message => message })
}
