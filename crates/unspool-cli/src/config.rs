use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use unspool_client::InstanceConfig;
use unspool_graph::FetchConfig;

const INSTANCE_VAR: &str = "APP_INSTANCE";
const ACCESS_TOKEN_VAR: &str = "APP_ACCESS_TOKEN";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub fetch: FetchSettings,
    #[serde(default)]
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(default)]
    pub instance: String,
    #[serde(default)]
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub cache_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("cache"),
            output_dir: PathBuf::from("cache/output"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchSettings {
    /// Requests allowed per run; unset means page until the end
    #[serde(default)]
    pub max_pages: Option<usize>,
}

impl From<&FetchSettings> for FetchConfig {
    fn from(settings: &FetchSettings) -> Self {
        match settings.max_pages {
            Some(max_pages) => FetchConfig::new().with_max_pages(max_pages),
            None => FetchConfig::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables (`APP_PATHS__CACHE_DIR`, `APP_FETCH__MAX_PAGES`, ...)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut cfg: Config = builder.build()?.try_deserialize()?;

        // Load secrets from ENV (not in TOML)
        cfg.instance = required_secret(INSTANCE_VAR)?;
        cfg.access_token = required_secret(ACCESS_TOKEN_VAR)?;

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        builder.build()?.try_deserialize()
    }

    pub fn with_credentials(
        mut self,
        instance: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        self.instance = instance.into();
        self.access_token = access_token.into();
        self
    }

    pub fn instance_config(&self) -> InstanceConfig {
        InstanceConfig::new(&self.instance, &self.access_token)
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::from(&self.fetch)
    }
}

fn required_secret(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Message(format!(
            "{} is missing: {} and {} environment variables are required",
            name, INSTANCE_VAR, ACCESS_TOKEN_VAR
        ))),
    }
}
