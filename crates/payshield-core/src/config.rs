use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::AppConfig;

/// Errors produced while loading [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value is invalid.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_config`], this does NOT load `.env` files. Useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value is invalid.
pub fn load_config_from_env() -> Result<AppConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup, without
/// any `set_var`/`remove_var` calls.
fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let http_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(raw)
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected an http(s) URL, got \"{raw}\""),
            })
        }
    };

    let scoring_url = http_url("PAYSHIELD_SCORING_URL", "http://127.0.0.1:5000")?;
    let transaction_api_url = http_url("PAYSHIELD_TRANSACTION_API_URL", "http://127.0.0.1:4000")?;

    // An empty PAYSHIELD_GEOLOCATION_URL disables the capability entirely;
    // mount then behaves as if the platform had no geolocation support.
    let geolocation_raw = or_default("PAYSHIELD_GEOLOCATION_URL", "http://ip-api.com/json");
    let geolocation_url = if geolocation_raw.is_empty() {
        None
    } else if geolocation_raw.starts_with("http://") || geolocation_raw.starts_with("https://") {
        Some(geolocation_raw)
    } else {
        return Err(ConfigError::InvalidEnvVar {
            var: "PAYSHIELD_GEOLOCATION_URL".to_string(),
            reason: format!("expected an http(s) URL or an empty string, got \"{geolocation_raw}\""),
        });
    };

    let identity_path = PathBuf::from(or_default(
        "PAYSHIELD_IDENTITY_PATH",
        "./.payshield/identity.json",
    ));
    let api_token = lookup("PAYSHIELD_API_TOKEN").ok();
    let log_level = or_default("PAYSHIELD_LOG_LEVEL", "info");

    Ok(AppConfig {
        scoring_url,
        transaction_api_url,
        geolocation_url,
        identity_path,
        api_token,
        log_level,
    })
}
