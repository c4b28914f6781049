// src/secrets.rs
//! API key resolution. The key is looked up in the process environment,
//! then a local `.env` file, then a `secrets.toml` fallback. Resolution
//! happens once at startup, before any fetch is attempted.

use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

const API_KEY_VAR: &str = "API_KEY";
const SECRETS_FILE: &str = "secrets.toml";

#[derive(Debug, Error)]
pub enum SecretError {
    #[error(
        "no API key found: set {API_KEY_VAR} in the environment or a .env file, \
         or add `api_key` to {SECRETS_FILE}"
    )]
    Missing,
    #[error("failed to read {SECRETS_FILE}: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid {SECRETS_FILE}: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Resolves the job API key, or reports where it was looked for.
pub fn resolve_api_key() -> Result<String, SecretError> {
    // Loads .env into the process environment; missing file is fine.
    dotenvy::dotenv().ok();

    if let Some(key) = env_opt(API_KEY_VAR) {
        info!("API key resolved from environment");
        return Ok(key);
    }

    let path = Path::new(SECRETS_FILE);
    if path.exists() {
        let raw = fs::read_to_string(path)?;
        if let Some(key) = api_key_from_toml(&raw)? {
            info!("API key resolved from {}", SECRETS_FILE);
            return Ok(key);
        }
    }

    Err(SecretError::Missing)
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Accepts either a top-level `api_key` or one under a `[default]` table.
fn api_key_from_toml(raw: &str) -> Result<Option<String>, toml::de::Error> {
    let value: toml::Value = toml::from_str(raw)?;
    let key = value
        .get("api_key")
        .or_else(|| value.get("default").and_then(|t| t.get("api_key")))
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_api_key() {
        let key = api_key_from_toml("api_key = \"abc123\"\n").unwrap();
        assert_eq!(key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_default_table_api_key() {
        let key = api_key_from_toml("[default]\napi_key = \"abc123\"\n").unwrap();
        assert_eq!(key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        let key = api_key_from_toml("api_key = \"\"\n").unwrap();
        assert_eq!(key, None);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(api_key_from_toml("api_key = ").is_err());
    }
}
