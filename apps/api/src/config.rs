use anyhow::{Context, Result};

use crate::cors::DEFAULT_ALLOWED_ORIGINS;
use crate::llm_client::DEFAULT_GEMINI_BASE_URL;

const DEFAULT_PORT: &str = "10000";

/// Application configuration loaded from environment variables.
///
/// The provider key is deliberately optional: a missing `API_KEY` is reported at
/// startup and again on every generation request, but never stops the process.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub gemini_base_url: String,
    pub allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_key: optional_env("API_KEY"),
            gemini_base_url: optional_env("GEMINI_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            allowed_origins: optional_env("ALLOWED_ORIGINS")
                .map(|raw| parse_origin_list(&raw))
                .unwrap_or_else(default_origins),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Reads an env var, treating unset and blank values the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn default_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS
        .iter()
        .map(|o| o.to_string())
        .collect()
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
