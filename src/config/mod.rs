pub mod toml_config;

use crate::utils::error::{AnalyzerError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

pub use toml_config::AnalyzerSettings;

#[derive(Debug, Clone, Parser)]
#[command(name = "lynalyze-analyzer")]
#[command(about = "HTTP microservice for text, image and audio analysis", version)]
pub struct ServerConfig {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5001)]
    pub port: u16,

    #[arg(long, env = "ANALYZER_CONFIG", help = "Path to a TOML file with analyzer settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, env = "LOG_JSON", help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ServerConfig {
    /// Host and port for `TcpListener::bind`; hostnames are resolved there.
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// 載入分析設定；未指定檔案時使用預設值
    pub fn load_settings(&self) -> Result<AnalyzerSettings> {
        let settings = match &self.config {
            Some(path) => {
                tracing::info!("Loading analyzer settings from {}", path.display());
                AnalyzerSettings::from_file(path)?
            }
            None => AnalyzerSettings::default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        if self.host.is_empty() || self.host.chars().any(char::is_whitespace) {
            return Err(AnalyzerError::InvalidConfigValueError {
                field: "host".to_string(),
                value: self.host.clone(),
                reason: "Host must be a non-empty name or address without whitespace".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        if std::env::var("HOST").is_ok() || std::env::var("PORT").is_ok() {
            return;
        }
        let config = ServerConfig::parse_from(["lynalyze-analyzer"]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5001);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config =
            ServerConfig::parse_from(["lynalyze-analyzer", "--host", "127.0.0.1", "--port", "8080"]);
        assert_eq!(config.bind_target(), ("127.0.0.1", 8080));
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_hostname_binds() {
        let config =
            ServerConfig::parse_from(["lynalyze-analyzer", "--host", "localhost", "--port", "0"]);
        assert!(config.validate().is_ok());

        let listener = tokio::net::TcpListener::bind(config.bind_target()).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[test]
    fn test_invalid_host_fails_validation() {
        let config = ServerConfig::parse_from(["lynalyze-analyzer", "--host", "not a host"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let config = ServerConfig::parse_from([
            "lynalyze-analyzer",
            "--config",
            "/nonexistent/lynalyze.toml",
        ]);
        assert!(config.load_settings().is_err());
    }
}
