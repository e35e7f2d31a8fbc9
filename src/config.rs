use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub mongodb: MongoConfig,
    pub report: ReportConfig,
}

/// MongoDB connection configuration
///
/// CLI flags take precedence over these values; they in turn take
/// precedence over config.toml via MONGO_* environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub tls_cert: Option<PathBuf>,
    pub tls_ca: Option<PathBuf>,
    pub server_selection_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub top_k: usize,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            username: None,
            password: None,
            tls_cert: None,
            tls_ca: None,
            server_selection_timeout_seconds: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = MongoConfig::default();
        let config = Config::builder()
            .set_default("mongodb.host", defaults.host)?
            .set_default("mongodb.port", defaults.port as i64)?
            .set_default(
                "mongodb.server_selection_timeout_seconds",
                defaults.server_selection_timeout_seconds as i64,
            )?
            .set_default("report.top_k", 5)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // MONGO_HOST / MONGO_PORT environment variables override file settings
        if let Ok(host) = std::env::var("MONGO_HOST") {
            app_config.mongodb.host = host;
        }
        if let Ok(port) = std::env::var("MONGO_PORT") {
            app_config.mongodb.port = port
                .parse()
                .map_err(|_| ConfigError::Message(format!("invalid MONGO_PORT: {}", port)))?;
        }

        Ok(app_config)
    }

    /// Get config values for CLI argument resolution, falling back to
    /// built-in defaults if no config file is present or readable
    pub fn get_defaults() -> Self {
        Self::load().unwrap_or_else(|_| Self {
            mongodb: MongoConfig::default(),
            report: ReportConfig { top_k: 5 },
        })
    }
}
