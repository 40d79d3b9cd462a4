use std::env;

use super::error::ConfigError;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - PORT: Port to bind (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let port = port
            .ok_or(ConfigError::Missing("PORT"))?
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        Ok(Self {
            ip: ip.unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
        })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: 3001,
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "0.0.0.0:3001");
    }

    #[test]
    fn should_default_ip_when_not_set() {
        let config = ServerConfig::from_values(None, Some("3001".to_string())).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:3001");
    }

    #[test]
    fn should_fail_when_port_is_missing() {
        let result = ServerConfig::from_values(None, None);
        assert!(matches!(result, Err(ConfigError::Missing("PORT"))));
    }

    #[test]
    fn should_fail_when_port_is_not_a_number() {
        let result = ServerConfig::from_values(None, Some("http".to_string()));
        assert!(matches!(result, Err(ConfigError::Invalid("PORT"))));
    }
}
