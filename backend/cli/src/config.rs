use lensbot_core::LensBotError;
use serde::Deserialize;

/// Lensbot runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Directory for rolling log files
    pub log_dir: String,

    // LINE
    pub line_channel_secret: Option<String>,
    pub line_channel_access_token: Option<String>,
    pub line_webhook_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            line_channel_secret: None,
            line_channel_access_token: None,
            line_webhook_path: "/webhooks/line".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("LENSBOT_BIND")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("LENSBOT_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_dir: std::env::var("LENSBOT_LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            line_channel_secret: std::env::var("LINE_CHANNEL_SECRET").ok(),
            line_channel_access_token: std::env::var("LINE_CHANNEL_ACCESS_TOKEN").ok(),
            line_webhook_path: std::env::var("LINE_WEBHOOK_PATH")
                .unwrap_or_else(|_| "/webhooks/line".to_string()),
        }
    }

    /// LINE credentials are mandatory for `serve`.
    pub fn require_line(&self) -> Result<(String, String), LensBotError> {
        let secret = self.line_channel_secret.clone().ok_or_else(|| {
            LensBotError::ConfigError("LINE_CHANNEL_SECRET is not set".to_string())
        })?;
        let token = self.line_channel_access_token.clone().ok_or_else(|| {
            LensBotError::ConfigError("LINE_CHANNEL_ACCESS_TOKEN is not set".to_string())
        })?;
        Ok((secret, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.line_webhook_path, "/webhooks/line");
    }

    #[test]
    fn missing_line_credentials_is_a_config_error() {
        let config = Config::default();
        let err = config.require_line().unwrap_err();
        assert!(err.to_string().contains("LINE_CHANNEL_SECRET"));
    }

    #[test]
    fn partial_line_credentials_is_a_config_error() {
        let config = Config {
            line_channel_secret: Some("secret".to_string()),
            ..Config::default()
        };
        let err = config.require_line().unwrap_err();
        assert!(err.to_string().contains("LINE_CHANNEL_ACCESS_TOKEN"));
    }
}
