//! Scoring configuration
//!
//! All four parameters are optional in the config file and fall back to the
//! documented defaults. An explicit `--config` path must parse; the implicit
//! `phrs.toml` in the working directory is best-effort and degrades to the
//! defaults with a warning.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::errors::{Error, Result};

/// Config file looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "phrs.toml";

/// Scoring parameters for both pipeline stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Exponent slope for AQI excess above the clean-air threshold
    #[serde(default = "default_beta_aqi")]
    pub beta_aqi: f64,

    /// Exponent slope for deviation from the comfort temperature
    #[serde(default = "default_beta_temp")]
    pub beta_temp: f64,

    /// Multiplier applied to female group scores
    #[serde(default = "default_female_factor")]
    pub female_factor: f64,

    /// Weight applied to smoking percentages before the log1p penalty
    #[serde(default = "default_s_weight")]
    pub s_weight: f64,
}

fn default_beta_aqi() -> f64 {
    0.004
}

fn default_beta_temp() -> f64 {
    0.02
}

fn default_female_factor() -> f64 {
    1.17
}

fn default_s_weight() -> f64 {
    0.5
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            beta_aqi: default_beta_aqi(),
            beta_temp: default_beta_temp(),
            female_factor: default_female_factor(),
            s_weight: default_s_weight(),
        }
    }
}

impl ScoringConfig {
    /// Check every parameter is usable before scoring starts.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let named = [
            ("beta_aqi", self.beta_aqi),
            ("beta_temp", self.beta_temp),
            ("female_factor", self.female_factor),
            ("s_weight", self.s_weight),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(format!("{name} must be finite"));
            }
        }
        if self.beta_aqi < 0.0 || self.beta_temp < 0.0 {
            return Err("beta_aqi and beta_temp must be non-negative".to_string());
        }
        if self.s_weight < 0.0 {
            return Err("s_weight must be non-negative".to_string());
        }
        if self.female_factor <= 0.0 {
            return Err("female_factor must be positive".to_string());
        }
        Ok(())
    }

    /// Parse and validate config from TOML contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: ScoringConfig = toml::from_str(contents)
            .map_err(|e| Error::Configuration(format!("failed to parse scoring config: {e}")))?;
        config.validate().map_err(Error::Configuration)?;
        Ok(config)
    }

    /// Load configuration. An explicit path is authoritative and its errors
    /// propagate; the implicit `phrs.toml` lookup warns and defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                Self::parse(&contents)
            }
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                match fs::read_to_string(default_path)
                    .map_err(Error::from)
                    .and_then(|contents| Self::parse(&contents))
                {
                    Ok(config) => {
                        log::debug!("loaded config from {CONFIG_FILE_NAME}");
                        Ok(config)
                    }
                    Err(e) => {
                        log::warn!("ignoring {CONFIG_FILE_NAME}: {e}");
                        Ok(Self::default())
                    }
                }
            }
        }
    }
}
