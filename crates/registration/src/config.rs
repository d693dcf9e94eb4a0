//! Registration configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CUSTOMER_API_URL` - Customer API collection root
//!   (default: `http://localhost:8080/api/v1/clientes`)
//! - `VIACEP_BASE_URL` - ViaCEP base URL
//!   (default: `https://viacep.com.br/ws`)

use thiserror::Error;
use url::Url;

const DEFAULT_CUSTOMER_API_URL: &str = "http://localhost:8080/api/v1/clientes";
const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br/ws";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Registration application configuration.
#[derive(Debug, Clone)]
pub struct RegistrationConfig {
    /// Customer API collection root, without trailing slash
    pub customer_api_url: String,
    /// ViaCEP base URL, without trailing slash
    pub viacep_base_url: String,
}

impl RegistrationConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a configured URL does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let customer_api_url = get_url("CUSTOMER_API_URL", DEFAULT_CUSTOMER_API_URL)?;
        let viacep_base_url = get_url("VIACEP_BASE_URL", DEFAULT_VIACEP_BASE_URL)?;

        Ok(Self {
            customer_api_url,
            viacep_base_url,
        })
    }
}

/// Read an environment variable with a fallback default.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read a URL-valued variable, validate it, and strip any trailing slash.
fn get_url(key: &str, default: &str) -> Result<String, ConfigError> {
    let raw = get_env_or_default(key, default);

    Url::parse(&raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    Ok(raw.trim_end_matches('/').to_string())
}
