// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const DEFAULT_API_BASE_URL: &str = "https://api.crackeddevs.com";
const DEFAULT_PAGE_LIMIT: u32 = 30;
const DEFAULT_MAX_PAGES: u32 = 10;
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Listings requested per page (the API's `limit` parameter).
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    /// Upper page bound for the fetch-all pass.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl EnvironmentConfig {
    /// Load configuration based on environment. Without a `config.yaml`
    /// the built-in defaults apply; the dashboard needs no setup beyond
    /// the API key.
    pub fn load(path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        if !path.exists() {
            info!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path, &environment)
    }

    fn get_environment() -> String {
        std::env::var("REMOTECO_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        let config_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config_file: ConfigFile = serde_yaml::from_str(&config_content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            page_limit: default_page_limit(),
            max_pages: default_max_pages(),
            port: default_port(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.page_limit, 30);
        assert_eq!(config.max_pages, 10);
        assert_eq!(config.api_base_url, "https://api.crackeddevs.com");
    }

    #[test]
    fn test_partial_yaml_section_fills_defaults() {
        let yaml = "local:\n  port: 9000\nproduction:\n  api_base_url: https://api.example.com\n";
        let file: ConfigFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.local.port, 9000);
        assert_eq!(file.local.page_limit, 30);
        assert_eq!(file.production.api_base_url, "https://api.example.com");
        assert_eq!(file.production.port, 8000);
    }
}
