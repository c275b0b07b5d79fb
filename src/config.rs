//! Configuration module for environment variables and application settings

use std::env;
use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;

/// Global application configuration loaded from environment variables
pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external research/email-generation backend
    pub research_api_url: String,

    /// Authentication configuration (shared credentials + cookie secret)
    pub auth: AuthConfig,

    /// Server configuration
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret used to sign session cookies (HS256)
    pub cookie_secret: String,
    /// Single-tenant shared username
    pub username: String,
    /// Single-tenant shared password
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Whether we are running in production (controls the cookie Secure flag)
    pub production: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The cookie secret and the shared credentials are required: refusing to
    /// start beats issuing session tokens nobody can verify.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            research_api_url: env::var("RESEARCH_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),

            auth: AuthConfig {
                cookie_secret: env::var("APP_COOKIE_SECRET")
                    .map_err(|_| anyhow!("APP_COOKIE_SECRET environment variable is required"))?,
                username: env::var("APP_USERNAME")
                    .map_err(|_| anyhow!("APP_USERNAME environment variable is required"))?,
                password: env::var("APP_PASSWORD")
                    .map_err(|_| anyhow!("APP_PASSWORD environment variable is required"))?,
            },

            server: ServerConfig {
                host: env::var("SERVER_HOST")
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
                production: env::var("APP_ENV")
                    .map(|v| v == "production")
                    .unwrap_or(false),
            },
        })
    }
}
