/// Runtime configuration for the pinning service
///
/// Everything the app needs from its environment is collected here once at
/// startup and handed to the HTTP client, instead of reading process-wide
/// environment state at call time.
use std::env;

/// Configuration values resolved from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential (JWT) for the Pinata API
    pub pinata_jwt: String,
    /// Base URL of the pinning API
    pub api_base: String,
    /// Base URL of the gateway that serves pinned files
    pub gateway_base: String,
}

impl Config {
    pub const DEFAULT_API_BASE: &'static str = "https://api.pinata.cloud";
    pub const DEFAULT_GATEWAY_BASE: &'static str = "https://gateway.pinata.cloud";

    /// Read configuration from the environment.
    ///
    /// `PINATA_JWT` carries the upload credential. A missing credential is
    /// not fatal here: the upload simply comes back unauthorized, and that
    /// failure is surfaced like any other. `PINATA_API_URL` and
    /// `PINATA_GATEWAY_URL` override the public Pinata endpoints.
    pub fn from_env() -> Self {
        let pinata_jwt = env::var("PINATA_JWT").unwrap_or_default();
        if pinata_jwt.is_empty() {
            log::warn!("PINATA_JWT is not set; the pinning service will reject uploads");
        }

        Config {
            pinata_jwt,
            api_base: env::var("PINATA_API_URL")
                .unwrap_or_else(|_| Self::DEFAULT_API_BASE.to_string()),
            gateway_base: env::var("PINATA_GATEWAY_URL")
                .unwrap_or_else(|_| Self::DEFAULT_GATEWAY_BASE.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pinata_jwt: String::new(),
            api_base: Self::DEFAULT_API_BASE.to_string(),
            gateway_base: Self::DEFAULT_GATEWAY_BASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_public_pinata() {
        let config = Config::default();
        assert_eq!(config.api_base, "https://api.pinata.cloud");
        assert_eq!(config.gateway_base, "https://gateway.pinata.cloud");
        assert!(config.pinata_jwt.is_empty());
    }
}
