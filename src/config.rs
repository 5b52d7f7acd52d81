//! # Meter Configuration
//! Display defaults loaded from TOML, with an env override for the path.
//!
//! Resilient by design: a missing or malformed file falls back to the built-in
//! defaults, and a non-positive `default_temperature` is replaced rather than
//! allowed to reach the softmax as a precondition violation.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_METER_CONFIG_PATH: &str = "config/meter.toml";
pub const ENV_METER_CONFIG_PATH: &str = "METER_CONFIG_PATH";

const DEFAULT_TEMPERATURE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeterConfig {
    /// Temperature used when the caller does not pass one.
    #[serde(default = "default_temperature")]
    pub default_temperature: f64,
    /// Cap on chart rows.
    #[serde(default = "default_max_bars")]
    pub max_bars: usize,
    /// Render the percentage column next to each bar.
    #[serde(default = "default_show_percent")]
    pub show_percent: bool,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_bars() -> usize {
    5
}

fn default_show_percent() -> bool {
    true
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            default_temperature: default_temperature(),
            max_bars: default_max_bars(),
            show_percent: default_show_percent(),
        }
    }
}

impl MeterConfig {
    /// Load configuration from a TOML file. Falls back to defaults on error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let cfg = match fs::read_to_string(&path) {
            Ok(s) => toml::from_str(&s).unwrap_or_else(|e| {
                warn!(path = %path.as_ref().display(), error = %e, "bad meter config, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        cfg.sanitized()
    }

    /// Load from `METER_CONFIG_PATH` if set, otherwise the default path.
    pub fn from_env_or_default() -> Self {
        let path = std::env::var(ENV_METER_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_METER_CONFIG_PATH.to_string());
        Self::load_from_file(path)
    }

    fn sanitized(mut self) -> Self {
        if !(self.default_temperature > 0.0) || !self.default_temperature.is_finite() {
            warn!(
                value = self.default_temperature,
                "non-positive default_temperature, using {}", DEFAULT_TEMPERATURE
            );
            self.default_temperature = DEFAULT_TEMPERATURE;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = MeterConfig::load_from_file("does/not/exist.toml");
        assert_eq!(cfg, MeterConfig::default());
        assert_eq!(cfg.default_temperature, 1.0);
        assert_eq!(cfg.max_bars, 5);
        assert!(cfg.show_percent);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: MeterConfig = toml::from_str("max_bars = 8").unwrap();
        assert_eq!(cfg.max_bars, 8);
        assert_eq!(cfg.default_temperature, 1.0);
        assert!(cfg.show_percent);
    }

    #[test]
    fn full_toml_round_trips() {
        let cfg: MeterConfig = toml::from_str(
            "default_temperature = 0.7\nmax_bars = 3\nshow_percent = false",
        )
        .unwrap();
        assert_eq!(cfg.default_temperature, 0.7);
        assert_eq!(cfg.max_bars, 3);
        assert!(!cfg.show_percent);
    }

    #[test]
    fn non_positive_temperature_is_replaced() {
        let cfg: MeterConfig = toml::from_str("default_temperature = 0.0").unwrap();
        assert_eq!(cfg.sanitized().default_temperature, 1.0);

        let cfg: MeterConfig = toml::from_str("default_temperature = -2.5").unwrap();
        assert_eq!(cfg.sanitized().default_temperature, 1.0);
    }
}
