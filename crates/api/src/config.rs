//! Listener configuration.
//!
//! The binary always serves on [`DEFAULT_HOST`]:[`DEFAULT_PORT`] and reads no
//! environment for it. Other addresses exist for embedding and tests.

/// Host the binary binds.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the binary binds.
pub const DEFAULT_PORT: u16 = 8080;

/// Tracing filter used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Address the server listens on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Loopback listener on `port`. Port `0` picks an ephemeral port.
    pub fn loopback(port: u16) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port,
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fixed_public_listener() {
        assert_eq!(Config::default().addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_loopback_keeps_port() {
        let config = Config::loopback(0);
        assert_eq!(config.addr(), "127.0.0.1:0");
        assert_ne!(config, Config::default());
    }

    #[test]
    fn test_default_log_level_parses_as_filter() {
        assert!(DEFAULT_LOG_LEVEL.parse::<tracing_subscriber::EnvFilter>().is_ok());
    }
}
