use crate::workflows::batch::BatchLimits;
use crate::workflows::comments::{DEFAULT_TARGET_CHARS, MIN_TARGET_CHARS};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub generation: GenerationConfig,
    pub batch: BatchConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let target_chars = usize_var("COMMENT_TARGET_CHARS", DEFAULT_TARGET_CHARS)?;
        if target_chars < MIN_TARGET_CHARS {
            return Err(ConfigError::TargetCharsTooSmall(target_chars));
        }

        let defaults = BatchLimits::default();
        let max_rows = usize_var("BATCH_MAX_ROWS", defaults.max_rows)?;
        if max_rows == 0 {
            return Err(ConfigError::NoBatchRows);
        }
        let name_max_length = usize_var("NAME_MAX_LENGTH", defaults.name_max_len)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            generation: GenerationConfig { target_chars },
            batch: BatchConfig {
                max_rows,
                name_max_length,
            },
        })
    }
}

fn usize_var(variable: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(variable) {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidNumber { variable, value }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Comment assembly settings.
#[derive(Debug, Clone, Copy)]
pub struct GenerationConfig {
    /// Upper bound on comment length, in characters.
    pub target_chars: usize,
}

/// Limits applied to uploaded batches.
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    pub max_rows: usize,
    pub name_max_length: usize,
}

impl BatchConfig {
    pub fn limits(&self) -> BatchLimits {
        BatchLimits {
            max_rows: self.max_rows,
            name_max_len: self.name_max_length,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber {
        variable: &'static str,
        value: String,
    },
    TargetCharsTooSmall(usize),
    NoBatchRows,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { variable, value } => {
                write!(f, "{variable} must be a whole number, got '{value}'")
            }
            ConfigError::TargetCharsTooSmall(value) => write!(
                f,
                "COMMENT_TARGET_CHARS must be at least {MIN_TARGET_CHARS}, got {value}"
            ),
            ConfigError::NoBatchRows => write!(f, "BATCH_MAX_ROWS must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::TargetCharsTooSmall(_)
            | ConfigError::NoBatchRows => None,
        }
    }
}
