use crate::error::{BlendError, EngineResult};
use tracing::Level;
use std::str::FromStr;

pub const PORT_VAR: &str = "PORT";
pub const LOG_LEVEL_VAR: &str = "BLEND_LOG_LEVEL";

/// Bounds and defaults of the calculator's input widgets.
pub mod limits {
    use crate::error::{BlendError, EngineResult};

    pub const TANK_CAPACITY_MIN: f64 = 0.0;
    pub const TANK_CAPACITY_MAX: f64 = 300.0;
    pub const TANK_CAPACITY_DEFAULT: f64 = 50.0;
    pub const TANK_CAPACITY_STEP: f64 = 1.0;

    pub const PRICE_STEP: f64 = 1.0;

    pub const CUSTOM_BLEND_MIN: f64 = 0.0;
    pub const CUSTOM_BLEND_MAX: f64 = 85.0;
    pub const CUSTOM_BLEND_DEFAULT: f64 = 10.0;

    pub const PARTIAL_AMOUNT_DEFAULT: f64 = 30.0;
    pub const TOP_OFF_LEVEL_FRACTION: f64 = 0.25;

    pub fn partial_amount_default(tank_capacity: f64) -> f64 {
        PARTIAL_AMOUNT_DEFAULT.min(tank_capacity)
    }

    pub fn top_off_level_default(tank_capacity: f64) -> f64 {
        tank_capacity * TOP_OFF_LEVEL_FRACTION
    }

    pub fn tank_capacity(value: f64) -> EngineResult<f64> {
        if value.is_finite() && (TANK_CAPACITY_MIN..=TANK_CAPACITY_MAX).contains(&value) {
            Ok(value)
        } else {
            Err(BlendError::invalid(
                "tank_capacity",
                value,
                "must be between 0 and 300",
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    #[cfg_attr(not(feature = "server"), allow(dead_code))]
    pub port: u16,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: 8080,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Reads the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source; unset variables
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> EngineResult<Self> {
        let mut config = AppConfig::default();

        if let Some(raw) = lookup(PORT_VAR) {
            config.port = raw
                .trim()
                .parse()
                .map_err(|e| BlendError::Config(format!("{PORT_VAR}={raw}: {e}")))?;
        }

        if let Some(raw) = lookup(LOG_LEVEL_VAR) {
            config.log_level = Level::from_str(raw.trim())
                .map_err(|e| BlendError::Config(format!("{LOG_LEVEL_VAR}={raw}: {e}")))?;
        }

        Ok(config)
    }
}
