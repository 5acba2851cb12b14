//! TOML configuration

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;

use deleterious_core::types::{DeleteMessages, IdType, ResourceDescriptor};

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "DELETERIOUS_CONFIG";
/// Configuration file used when neither an argument nor `DELETERIOUS_CONFIG` is given
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LogConfig,
    pub auth: AuthConfig,
    pub resources: Vec<ResourceConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `0` means one worker per CPU
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            workers: 0,
        }
    }
}

impl ServerConfig {
    pub fn workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/deleterious.db"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
    pub format: LogFormat,
    /// Directory for rotated JSON log files; stdout only when unset
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            directory: None,
            file_prefix: "deleterious.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    pub tokens: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tokens: Vec::new(),
        }
    }
}

/// One deletable resource
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceConfig {
    pub model_name: String,
    /// Collection path, defaults to `<model_name>s`
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub url_path: String,
    #[serde(default)]
    pub id_type: IdType,
    #[serde(default)]
    pub atomic_delete: bool,
    #[serde(default)]
    pub messages: DeleteMessages,
}

impl ResourceConfig {
    pub fn descriptor(&self) -> ResourceDescriptor {
        ResourceDescriptor::new(&self.model_name).with_url_path(&self.url_path)
    }

    pub fn prefix(&self) -> String {
        match &self.prefix {
            Some(prefix) => prefix.trim_matches('/').to_string(),
            None => format!("{}s", self.descriptor().model_name()),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// Lookup order: `explicit`, then `DELETERIOUS_CONFIG`, then `config.toml`.
    /// Only the implicit default path may be absent, in which case defaults apply.
    pub fn load(explicit: Option<PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match explicit.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from)) {
            Some(path) => (path, true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::parse(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        for resource in &self.resources {
            if resource.model_name.trim().is_empty() {
                bail!("resource model_name must not be empty");
            }
        }
        if self.auth.enabled && self.auth.tokens.iter().all(|t| t.trim().is_empty()) {
            bail!("auth is enabled but no tokens are configured");
        }
        Ok(())
    }
}
