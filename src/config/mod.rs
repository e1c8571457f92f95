use std::env;

use crate::core::{AppError, Result};

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.database.uri.starts_with("mongodb") {
            return Err(AppError::Configuration(
                "MONGODB_URI must be a mongodb:// or mongodb+srv:// URI".to_string(),
            ));
        }

        if self.database.database.is_empty() {
            return Err(AppError::Configuration(
                "MONGODB_DATABASE must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
