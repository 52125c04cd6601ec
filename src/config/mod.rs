use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the externally-produced offers JSON array. Read-only,
    /// reloaded in full on every request.
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub client_id: String,
    pub client_secret: String,
    pub token_ttl_secs: u64,
}

impl AppConfig {
    /// Build configuration from the environment. Missing variables fall back
    /// to defaults rather than aborting startup: an empty JWT secret or
    /// client credential pair leaves auth non-functional, not the process
    /// crashed.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        let file = env::var("DATA_FILE").unwrap_or_else(|_| "./output.json".to_string());

        Self {
            server: ServerConfig { port },
            data: DataConfig { file },
            security: SecurityConfig {
                jwt_secret: env::var("JWT_SECRET").unwrap_or_default(),
                client_id: env::var("CLIENT_ID").unwrap_or_default(),
                client_secret: env::var("CLIENT_SECRET").unwrap_or_default(),
                token_ttl_secs: 3600,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
