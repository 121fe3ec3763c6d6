use std::path::PathBuf;

use crate::config::ConfigError;

/// Runtime configuration for the payshield clients.
///
/// Loaded from the environment by [`crate::load_config`]. `geolocation_url`
/// is `None` when the platform's geolocation capability has been disabled
/// (empty `PAYSHIELD_GEOLOCATION_URL`).
#[derive(Clone)]
pub struct AppConfig {
    pub scoring_url: String,
    pub transaction_api_url: String,
    pub geolocation_url: Option<String>,
    pub identity_path: PathBuf,
    pub api_token: Option<String>,
    pub log_level: String,
}

impl AppConfig {
    /// Returns the authentication token forwarded to the transaction-creation
    /// collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] naming `PAYSHIELD_API_TOKEN`
    /// when no token was configured.
    pub fn require_api_token(&self) -> Result<&str, ConfigError> {
        self.api_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("PAYSHIELD_API_TOKEN".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("scoring_url", &self.scoring_url)
            .field("transaction_api_url", &self.transaction_api_url)
            .field("geolocation_url", &self.geolocation_url)
            .field("identity_path", &self.identity_path)
            .field("api_token", &self.api_token.as_ref().map(|_| "[redacted]"))
            .field("log_level", &self.log_level)
            .finish()
    }
}
