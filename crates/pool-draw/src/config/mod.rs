use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::pools::{DrawSettings, PoolCount, PoolError, SportMatch};

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
    pub draw: DrawConfig,
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
        let log_format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw).ok_or(ConfigError::InvalidLogFormat(raw))?,
            Err(_) => LogFormat::Compact,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                log_format,
            },
            draw: DrawConfig::from_env()?,
        })
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

/// Tracing output controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Where the roster and past results come from, and how pools are drawn.
#[derive(Debug, Clone)]
pub struct DrawConfig {
    pub settings: DrawSettings,
    pub history_path: PathBuf,
    pub roster: Option<RosterLocation>,
    pub roster_timeout: Duration,
}

impl DrawConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let pool_count = match env::var("APP_POOL_COUNT") {
            Ok(raw) => raw
                .parse::<PoolCount>()
                .map_err(ConfigError::InvalidPoolCount)?,
            Err(_) => PoolCount::default(),
        };
        let sport_match = match env::var("APP_SPORT_MATCH") {
            Ok(raw) => raw
                .parse::<SportMatch>()
                .map_err(ConfigError::InvalidSportMatch)?,
            Err(_) => SportMatch::default(),
        };

        let history_path = env::var("APP_HISTORY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("finalists.txt"));

        let roster = match (non_empty_var("APP_ROSTER_URL"), non_empty_var("APP_ROSTER_PATH")) {
            (Some(url), _) => Some(RosterLocation::Url(url)),
            (None, Some(path)) => Some(RosterLocation::File(PathBuf::from(path))),
            (None, None) => None,
        };

        let roster_timeout = env::var("APP_ROSTER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .ok_or(ConfigError::InvalidRosterTimeout)?;

        Ok(Self {
            settings: DrawSettings {
                pool_count,
                sport_match,
            },
            history_path,
            roster,
            roster_timeout,
        })
    }

    pub fn roster_location(&self) -> Result<&RosterLocation, ConfigError> {
        self.roster.as_ref().ok_or(ConfigError::MissingRosterSource)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterLocation {
    Url(String),
    File(PathBuf),
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidLogFormat(String),
    InvalidPoolCount(PoolError),
    InvalidSportMatch(PoolError),
    InvalidRosterTimeout,
    MissingRosterSource,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json', got '{value}'")
            }
            ConfigError::InvalidPoolCount(err) => write!(f, "APP_POOL_COUNT: {err}"),
            ConfigError::InvalidSportMatch(err) => write!(f, "APP_SPORT_MATCH: {err}"),
            ConfigError::InvalidRosterTimeout => {
                write!(f, "APP_ROSTER_TIMEOUT_SECS must be a positive number of seconds")
            }
            ConfigError::MissingRosterSource => {
                write!(f, "set APP_ROSTER_URL or APP_ROSTER_PATH to serve pools")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPoolCount(err) | ConfigError::InvalidSportMatch(err) => Some(err),
            ConfigError::InvalidPort
            | ConfigError::InvalidLogFormat(_)
            | ConfigError::InvalidRosterTimeout
            | ConfigError::MissingRosterSource => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    const VARS: &[&str] = &[
        "APP_ENV",
        "APP_HOST",
        "APP_PORT",
        "APP_LOG_LEVEL",
        "APP_LOG_FORMAT",
        "APP_POOL_COUNT",
        "APP_SPORT_MATCH",
        "APP_HISTORY_PATH",
        "APP_ROSTER_URL",
        "APP_ROSTER_PATH",
        "APP_ROSTER_TIMEOUT_SECS",
    ];

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.log_format, LogFormat::Compact);
        assert_eq!(config.draw.settings.pool_count.get(), 4);
        assert_eq!(config.draw.settings.sport_match, SportMatch::Substring);
        assert_eq!(config.draw.history_path, PathBuf::from("finalists.txt"));
        assert_eq!(config.draw.roster_timeout, Duration::from_secs(10));
        assert!(matches!(
            config.draw.roster_location(),
            Err(ConfigError::MissingRosterSource)
        ));
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn rejects_non_positive_pool_count() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        for raw in ["0", "-3"] {
            env::set_var("APP_POOL_COUNT", raw);
            let error = AppConfig::load().expect_err("pool count must be positive");
            assert!(matches!(
                error,
                ConfigError::InvalidPoolCount(PoolError::InvalidPoolCount(_))
            ));
        }
        reset_env();
    }

    #[test]
    fn roster_url_wins_over_path() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ROSTER_PATH", "roster.csv");
        env::set_var("APP_ROSTER_URL", "https://example.com/roster.csv");
        env::set_var("APP_POOL_COUNT", "6");
        env::set_var("APP_SPORT_MATCH", "token");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.draw.roster_location().expect("roster configured"),
            &RosterLocation::Url("https://example.com/roster.csv".to_string())
        );
        assert_eq!(config.draw.settings.pool_count.get(), 6);
        assert_eq!(config.draw.settings.sport_match, SportMatch::Token);
        reset_env();
    }

    #[test]
    fn rejects_unknown_log_format() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_LOG_FORMAT", "xml");
        let error = AppConfig::load().expect_err("format rejected");
        assert!(matches!(error, ConfigError::InvalidLogFormat(_)));
        reset_env();
    }
}
