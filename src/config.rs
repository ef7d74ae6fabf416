//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Development default values - NEVER use in production.
pub mod defaults {
    pub const DEV_HOST: &str = "127.0.0.1";
    pub const DEV_PORT: u16 = 8080;
    pub const DEV_BACKEND_URL: &str = "http://localhost:8000";
    pub const DEV_REQUEST_TIMEOUT_SECS: u64 = 10;
    pub const DEV_CONNECT_TIMEOUT_SECS: u64 = 3;
    pub const DEV_CORS_ORIGINS: &str = "http://localhost:5173";
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Check if this is a development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Live compliance backend connection settings.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    /// Base URL; API paths such as `/api/projects` are appended to it
    pub base_url: String,
    /// Total per-request timeout
    pub request_timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl BackendSettings {
    /// Settings pointing at `base_url` with development timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: Duration::from_secs(defaults::DEV_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(defaults::DEV_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Live backend settings
    pub backend: BackendSettings,
    /// Origins allowed by CORS
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `CC_HOST`: Server host (default: 127.0.0.1)
    /// - `CC_PORT`: Server port (default: 8080)
    /// - `CC_BACKEND_URL`: Live compliance backend base URL (default: http://localhost:8000)
    /// - `CC_REQUEST_TIMEOUT_SECS`: Per-request timeout (default: 10)
    /// - `CC_CONNECT_TIMEOUT_SECS`: Connect timeout (default: 3)
    /// - `CC_CORS_ORIGINS`: Comma-separated allowed origins (default: http://localhost:5173)
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_str = env::var("RUST_ENV").map_err(|_| ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        let host = env::var("CC_HOST").unwrap_or_else(|_| defaults::DEV_HOST.to_string());

        let port = env::var("CC_PORT")
            .unwrap_or_else(|_| defaults::DEV_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("CC_PORT must be a valid port number"))?;

        let base_url =
            env::var("CC_BACKEND_URL").unwrap_or_else(|_| defaults::DEV_BACKEND_URL.to_string());

        let request_timeout_secs = env::var("CC_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults::DEV_REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| {
                ConfigError::InvalidValue("CC_REQUEST_TIMEOUT_SECS must be a valid number")
            })?;

        let connect_timeout_secs = env::var("CC_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults::DEV_CONNECT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| {
                ConfigError::InvalidValue("CC_CONNECT_TIMEOUT_SECS must be a valid number")
            })?;

        let cors_origins = parse_origins(
            &env::var("CC_CORS_ORIGINS").unwrap_or_else(|_| defaults::DEV_CORS_ORIGINS.to_string()),
        );

        let config = Config {
            environment,
            host,
            port,
            backend: BackendSettings {
                base_url: base_url.trim_end_matches('/').to_string(),
                request_timeout: Duration::from_secs(request_timeout_secs),
                connect_timeout: Duration::from_secs(connect_timeout_secs),
            },
            cors_origins,
        };

        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate that production configuration does not use development defaults.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.backend.base_url == defaults::DEV_BACKEND_URL {
            errors.push(format!(
                "CC_BACKEND_URL still points at the development default '{}'.",
                defaults::DEV_BACKEND_URL
            ));
        }

        if self.cors_origins.is_empty() {
            errors.push("CC_CORS_ORIGINS must list at least one origin.".to_string());
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", bullet_list(.0))]
    ProductionValidation(Vec<String>),
}

fn bullet_list(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}
