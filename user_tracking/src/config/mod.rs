use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
    time::Duration,
};
use thiserror::Error;

use crate::model::DEFAULT_ACCURACY_THRESHOLD_M;

pub type SharedConfig = Arc<RwLock<Config>>;

const APP_NAME: &str = "user_tracking";
const CONFIG_FILE_NAME: &str = "config.json";
const MIN_STEP_INTERVAL_MS: u64 = 1;

fn default_config_path() -> PathBuf {
    let mut dir = dirs_next::config_dir().unwrap_or_else(|| {
        dirs_next::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
    });
    dir.push(APP_NAME);
    dir.push(CONFIG_FILE_NAME);
    dir
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Custom SVG icons replacing the built-in ones
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IconPaths {
    pub tracking_on: PathBuf,
    pub tracking_off: PathBuf,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub latitude: f64,
    pub longitude: f64,
    /// Accuracy of the first fix after tracking starts (meters)
    pub initial_accuracy_m: f64,
    /// Each step multiplies the accuracy by this factor
    pub improvement_factor: f64,
    pub best_accuracy_m: f64,
    pub step_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            latitude: 45.503575,
            longitude: -73.587090,
            initial_accuracy_m: 800.0,
            improvement_factor: 0.5,
            best_accuracy_m: 8.0,
            step_interval_ms: 700,
        }
    }
}

impl SimulationConfig {
    /// Never zero; the interval timer rejects an empty period.
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms.max(MIN_STEP_INTERVAL_MS))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub accuracy_threshold_m: f64,
    pub fade_duration_ms: u64,
    pub icon_size: f32,
    pub corner_radius: f32,
    /// RGB, 0.0..=1.0
    pub tint: [f32; 3],
    pub icons: Option<IconPaths>,
    pub simulation: SimulationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accuracy_threshold_m: DEFAULT_ACCURACY_THRESHOLD_M,
            fade_duration_ms: 200,
            icon_size: 24.0,
            corner_radius: 4.0,
            tint: [0.918, 0.878, 0.349],
            icons: None,
            simulation: SimulationConfig::default(),
        }
    }
}

impl Config {
    /// Load from disk, or return default if missing
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load_from(&default_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let raw = fs::read_to_string(path)?;
            Self::from_json(&raw)
        } else {
            Ok(Config::default())
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Initialize the global config at application startup
    pub fn initialize() -> Result<(), ConfigError> {
        let cfg = Config::load_or_default()?;
        let mut guard = GLOBAL_CONFIG.write().unwrap_or_else(|e| e.into_inner());
        *guard = cfg;
        Ok(())
    }

    /// Get a cloned snapshot of the current config
    pub fn get() -> Config {
        GLOBAL_CONFIG
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
    }

    pub fn tint_color(&self) -> iced::Color {
        let [r, g, b] = self.tint;
        iced::Color::from_rgb(r, g, b)
    }
}

/// Global shared config, accessible synchronously
pub static GLOBAL_CONFIG: Lazy<SharedConfig> =
    Lazy::new(|| Arc::new(RwLock::new(Config::default())));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let cfg = Config::from_json(r#"{ "accuracy_threshold_m": 50.0, "simulation": { "step_interval_ms": 100 } }"#)
            .unwrap();
        assert_eq!(cfg.accuracy_threshold_m, 50.0);
        assert_eq!(cfg.fade_duration(), Duration::from_millis(200));
        assert_eq!(cfg.simulation.step_interval(), Duration::from_millis(100));
        assert_eq!(cfg.simulation.initial_accuracy_m, 800.0);
        assert!(cfg.icons.is_none());
    }

    #[test]
    fn zero_step_interval_is_clamped() {
        let cfg = Config::from_json(r#"{ "simulation": { "step_interval_ms": 0 } }"#).unwrap();
        assert_eq!(cfg.simulation.step_interval(), Duration::from_millis(1));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            Config::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = PathBuf::from("/nonexistent/user_tracking/config.json");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
