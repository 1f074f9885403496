use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub extraction: ExtractionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Documents above this size are rejected before extraction runs.
    pub max_upload_bytes: u64,
    pub allowed_file_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            // Start with default values
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific config
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with ACADEME prefix
            .add_source(Environment::with_prefix("ACADEME").separator("__"));

        config.build()?.try_deserialize()
    }

    /// Layered load with the compiled-in defaults as the base.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                timeout_seconds: 30,
            },
            extraction: ExtractionConfig {
                max_upload_bytes: 20 * 1024 * 1024, // 20MB
                allowed_file_types: vec!["pdf".to_string()],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "plain".to_string(),
                file_path: None,
            },
        }
    }
}
