// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Configuration management for the ACF site

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::site::variants::Variant;

/// Main application configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Web server settings
    #[serde(default)]
    pub web: WebConfig,

    /// Notification stack timing
    #[serde(default)]
    pub animator: AnimatorConfig,

    /// Page content settings
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WebConfig {
    #[serde(default = "default_web_host")]
    pub host: String,
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// Directory served under `/assets`
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default = "default_true")]
    pub cors: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct AnimatorConfig {
    /// Period between stack advances
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Delay between staging a notification and settling it
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Fraction of the panel that must be on screen to run
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_variant")]
    pub default_variant: String,
    #[serde(default = "default_demo_url")]
    pub demo_url: String,
    /// Scroll offset after which the nav bar turns opaque
    #[serde(default = "default_nav_scroll_threshold")]
    pub nav_scroll_threshold_px: u32,
}

// Default value functions
fn default_true() -> bool { true }
fn default_web_host() -> String { "127.0.0.1".to_string() }
fn default_web_port() -> u16 { 3000 }
fn default_assets_dir() -> String { "public".to_string() }
fn default_tick_interval_ms() -> u64 { 2500 }
fn default_settle_delay_ms() -> u64 { 50 }
fn default_visibility_threshold() -> f64 { 0.3 }
fn default_variant() -> String { "investigate".to_string() }
fn default_demo_url() -> String { "https://demo.acf.international".to_string() }
fn default_nav_scroll_threshold() -> u32 { 20 }

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_web_host(),
            port: default_web_port(),
            assets_dir: default_assets_dir(),
            cors: true,
        }
    }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            visibility_threshold: default_visibility_threshold(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_variant: default_variant(),
            demo_url: default_demo_url(),
            nav_scroll_threshold_px: default_nav_scroll_threshold(),
        }
    }
}

impl AnimatorConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Copy of this config with a variant's tick interval applied
    pub fn for_variant(&self, variant: &Variant) -> Self {
        Self {
            tick_interval_ms: variant.tick_interval_ms.unwrap_or(self.tick_interval_ms),
            ..*self
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str::<Self>(&content)
                .map_err(|e| crate::SiteError::Config(format!("Failed to parse config: {}", e)))?
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the animator or router cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        let animator = &self.animator;
        if !(animator.visibility_threshold > 0.0 && animator.visibility_threshold <= 1.0) {
            return Err(crate::SiteError::Config(format!(
                "visibility_threshold must be in (0, 1], got {}",
                animator.visibility_threshold
            )));
        }
        if animator.tick_interval_ms == 0 || animator.settle_delay_ms == 0 {
            return Err(crate::SiteError::Config(
                "tick_interval_ms and settle_delay_ms must be positive".to_string(),
            ));
        }
        if animator.settle_delay_ms >= animator.tick_interval_ms {
            return Err(crate::SiteError::Config(format!(
                "settle_delay_ms ({}) must be shorter than tick_interval_ms ({})",
                animator.settle_delay_ms, animator.tick_interval_ms
            )));
        }
        if Variant::find(&self.site.default_variant).is_none() {
            return Err(crate::SiteError::UnknownVariant(self.site.default_variant.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_panel_timing() {
        let config = AppConfig::default();
        assert_eq!(config.animator.tick_interval(), Duration::from_millis(2500));
        assert_eq!(config.animator.settle_delay(), Duration::from_millis(50));
        assert!((config.animator.visibility_threshold - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.site.default_variant, "investigate");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("site.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.json");

        let mut config = AppConfig::default();
        config.web.port = 8088;
        config.site.default_variant = "newsroom".to_string();
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.web.port, 8088);
        assert_eq!(loaded.site.default_variant, "newsroom");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{"animator": {"tick_interval_ms": 4000}}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.animator.tick_interval_ms, 4000);
        assert_eq!(config.animator.settle_delay_ms, 50);
        assert_eq!(config.web.host, "127.0.0.1");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, crate::SiteError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_timing() {
        let mut config = AppConfig::default();
        config.animator.settle_delay_ms = 2500;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.animator.visibility_threshold = 0.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.animator.tick_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_variant() {
        let mut config = AppConfig::default();
        config.site.default_variant = "retro".to_string();
        assert!(matches!(
            config.validate(),
            Err(crate::SiteError::UnknownVariant(_))
        ));
    }

    #[test]
    fn test_variant_overrides_tick_interval() {
        let config = AnimatorConfig::default();
        let newsroom = Variant::find("newsroom").unwrap();
        let tuned = config.for_variant(newsroom);
        assert_eq!(tuned.tick_interval_ms, 3000);
        assert_eq!(tuned.settle_delay_ms, config.settle_delay_ms);

        let investigate = Variant::find("investigate").unwrap();
        assert_eq!(config.for_variant(investigate), config);
    }
}
