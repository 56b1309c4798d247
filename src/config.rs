use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub slider: SliderSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8050 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self { path: default_dataset_path() }
    }
}

fn default_dataset_path() -> String { "data/sample_dump.csv".to_string() }

/// Distance slider ("preferred circle") bounds in kilometres
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SliderSettings {
    #[serde(default = "default_slider_min")]
    pub min: f64,
    #[serde(default = "default_slider_max")]
    pub max: f64,
    #[serde(default = "default_slider_step")]
    pub step: f64,
    #[serde(default = "default_slider_value")]
    pub default: f64,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            min: default_slider_min(),
            max: default_slider_max(),
            step: default_slider_step(),
            default: default_slider_value(),
        }
    }
}

fn default_slider_min() -> f64 { 0.0 }
fn default_slider_max() -> f64 { 20.0 }
fn default_slider_step() -> f64 { 0.5 }
fn default_slider_value() -> f64 { 0.0 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DASHBOARD)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DASHBOARD__DATASET__PATH -> dataset.path
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("DASHBOARD")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slider() {
        let slider = SliderSettings::default();
        assert_eq!(slider.min, 0.0);
        assert_eq!(slider.max, 20.0);
        assert_eq!(slider.step, 0.5);
        assert_eq!(slider.default, 0.0);
    }

    #[test]
    fn test_default_dataset_path() {
        assert_eq!(Settings::default().dataset.path, "data/sample_dump.csv");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                "[server]\nport = 9000\n\n[slider]\nmax = 30.0\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.slider.max, 30.0);
        assert_eq!(settings.slider.step, 0.5);
        assert_eq!(settings.dataset.path, "data/sample_dump.csv");
    }
}
