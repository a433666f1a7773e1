use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SearchSettings {
    /// Radius used when a nearby request omits `radius_km`
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_radius_km: default_radius_km(),
        }
    }
}

fn default_radius_km() -> f64 { 5.0 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TUTOR__)
    /// 5. Plain HOST / PORT variables
    pub fn load() -> Result<Self, ConfigError> {
        let builder = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment());

        apply_env_overrides(builder)?.build()?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(environment());

        apply_env_overrides(builder)?.build()?.try_deserialize()
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("search.default_radius_km", default_radius_km())
}

// e.g., TUTOR__SERVER__PORT -> server.port
fn environment() -> Environment {
    Environment::with_prefix("TUTOR")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Honour the bare HOST and PORT variables set by container platforms
fn apply_env_overrides(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    use std::env;

    if let Ok(host) = env::var("HOST") {
        builder = builder.set_override("server.host", host)?;
    }
    if let Ok(port) = env::var("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|e| ConfigError::Message(format!("invalid PORT '{}': {}", port, e)))?;
        builder = builder.set_override("server.port", u64::from(port))?;
    }

    Ok(builder)
}
