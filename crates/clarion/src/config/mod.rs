use crate::workflows::feasibility::EngineConfig;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

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
    pub engine: EngineConfig,
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

        let engine = match env::var("APP_ENGINE_CONFIG") {
            Ok(path) if !path.trim().is_empty() => load_engine_config(PathBuf::from(path))?,
            _ => EngineConfig::standard(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            engine,
        })
    }
}

/// Reads weight tables from JSON. Omitted tables and fields keep their
/// standard values.
pub fn load_engine_config(path: PathBuf) -> Result<EngineConfig, ConfigError> {
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::EngineFile {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::EngineFormat { path, source })
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

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    EngineFile { path: PathBuf, source: std::io::Error },
    EngineFormat { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::EngineFile { path, .. } => {
                write!(f, "APP_ENGINE_CONFIG {} could not be read", path.display())
            }
            ConfigError::EngineFormat { path, source } => write!(
                f,
                "APP_ENGINE_CONFIG {} is not a valid engine table: {}",
                path.display(),
                source
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::EngineFile { source, .. } => Some(source),
            ConfigError::EngineFormat { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_ENGINE_CONFIG");
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
        assert_eq!(config.engine, EngineConfig::standard());
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
    fn rejects_non_numeric_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "eighty");
        match AppConfig::load() {
            Err(ConfigError::InvalidPort) => {}
            other => panic!("expected invalid port, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn engine_tables_load_from_file() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let path = env::temp_dir().join(format!("clarion-engine-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "recommendation": { "proceed_irr": 15.0 } }"#)
            .expect("write engine file");
        env::set_var("APP_ENGINE_CONFIG", &path);

        let config = AppConfig::load().expect("config loads");

        assert_eq!(config.engine.recommendation.proceed_irr, 15.0);
        assert_eq!(config.engine.recommendation.exit_irr_floor, 5.0);
        reset_env();
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_engine_file_is_reported() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENGINE_CONFIG", "/nonexistent/clarion/engine.json");
        match AppConfig::load() {
            Err(ConfigError::EngineFile { .. }) => {}
            other => panic!("expected engine file error, got {other:?}"),
        }
        reset_env();
    }
}
