//! Storefront Configuration
//!
//! Timings and factors for every behavior. Pages may override any subset
//! through a JSON block; unnamed keys keep their defaults.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid storefront config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("fade threshold {0} is outside 0..=1")]
    Threshold(f64),
    #[error("ambient sparkle period must be greater than zero")]
    ZeroPeriod,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub theme_transition_ms: u32,
    pub bounce_ms: u32,
    pub added_to_cart_ms: u32,
    pub sparkle_ms: u32,
    pub ambient_sparkle_ms: u32,
    pub ambient_period_ms: u32,
    pub stagger_ms: u32,
    /// Fraction of an element that must be visible before it fades in
    pub fade_threshold: f64,
    pub parallax_factor: f64,
    pub parallax_scale: f64,
    /// `log` level name for the browser console
    pub log_level: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            theme_transition_ms: 400,
            bounce_ms: 400,
            added_to_cart_ms: 600,
            sparkle_ms: 600,
            ambient_sparkle_ms: 1500,
            ambient_period_ms: 800,
            stagger_ms: 100,
            fade_threshold: 0.2,
            parallax_factor: 0.18,
            parallax_scale: 1.02,
            log_level: "info".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a JSON override block
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.fade_threshold) {
            return Err(ConfigError::Threshold(self.fade_threshold));
        }
        if self.ambient_period_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(())
    }

    /// Console log level, `Info` when the name is unknown
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
