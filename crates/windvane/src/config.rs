use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "windflower.toml";

/// Hard ceiling for the configured lean
pub const TILT_LIMIT_DEGREES: f32 = 45.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindvaneConfig {
    pub animator: AnimatorConfig,
    pub weather: WeatherConfig,
    pub search: SearchConfig,
}

/// How per-tick increments relate to elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMode {
    /// Fixed increment per tick; animation speed follows the frame rate
    PerTick,
    /// Increments scaled by `dt * reference_hz`, identical to `PerTick` at `reference_hz` fps
    TimeScaled { reference_hz: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    pub yaw_step_per_speed: f32,
    pub tilt_step_per_speed: f32,
    pub max_tilt_degrees: f32,
    pub idle_yaw_step: f32,
    pub baseline_yaw_degrees: f32,
    pub step_mode: StepMode,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            yaw_step_per_speed: 0.1,
            tilt_step_per_speed: 0.03,
            max_tilt_degrees: TILT_LIMIT_DEGREES,
            idle_yaw_step: 0.5,
            baseline_yaw_degrees: 90.0,
            step_mode: StepMode::PerTick,
        }
    }
}

impl AnimatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("yaw_step_per_speed", self.yaw_step_per_speed),
            ("tilt_step_per_speed", self.tilt_step_per_speed),
            ("idle_yaw_step", self.idle_yaw_step),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.max_tilt_degrees > 0.0 && self.max_tilt_degrees <= TILT_LIMIT_DEGREES) {
            return Err(ConfigError::Invalid(format!(
                "max_tilt_degrees must be in (0, {TILT_LIMIT_DEGREES}], got {}",
                self.max_tilt_degrees
            )));
        }
        if let StepMode::TimeScaled { reference_hz } = self.step_mode {
            if !(reference_hz > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "reference_hz must be positive, got {reference_hz}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub cities_path: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cities_path: "assets/data/cities.json".to_string(),
        }
    }
}

impl WindvaneConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: WindvaneConfig = toml::from_str(content)?;
        config.animator.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the config file, falling back to defaults if it is missing or broken
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("using default config, could not load {}: {err}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AnimatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = WindvaneConfig::default();
        config.animator.step_mode = StepMode::TimeScaled { reference_hz: 60.0 };
        config.weather.timeout_secs = 3;

        let path = std::env::temp_dir().join(format!("windvane-{}.toml", std::process::id()));
        config.save_to_file(&path).unwrap();
        let parsed = WindvaneConfig::load_from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(parsed.unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed = WindvaneConfig::from_toml(
            r#"
            [animator]
            idle_yaw_step = 1.5
            step_mode = "per_tick"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.animator.idle_yaw_step, 1.5);
        assert_eq!(parsed.animator.max_tilt_degrees, 45.0);
        assert_eq!(parsed.weather, WeatherConfig::default());
    }

    #[rstest]
    #[case("[animator]\nyaw_step_per_speed = 0.0")]
    #[case("[animator]\ntilt_step_per_speed = -1.0")]
    #[case("[animator]\nmax_tilt_degrees = 120.0")]
    #[case("[animator]\nmax_tilt_degrees = 45.5")]
    #[case("[animator]\nmax_tilt_degrees = 0.0")]
    #[case("[animator]\nstep_mode = { time_scaled = { reference_hz = 0.0 } }")]
    fn test_invalid_values_rejected(#[case] text: &str) {
        let result = WindvaneConfig::from_toml(text);
        assert!(matches!(result, Err(ConfigError::Invalid(_))), "{result:?}");
    }

    #[test]
    fn test_lower_tilt_limit_accepted() {
        let parsed = WindvaneConfig::from_toml("[animator]\nmax_tilt_degrees = 30.0").unwrap();
        assert_eq!(parsed.animator.max_tilt_degrees, 30.0);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = WindvaneConfig::load_or_default("does/not/exist.toml");
        assert_eq!(config, WindvaneConfig::default());
    }
}
