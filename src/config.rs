// src/config.rs
use std::env;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite-preview-06-17";

/// Upstream settings, read once at startup and shared through AppState.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base =
            env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let api_url =
            env::var("GEMINI_API_URL").unwrap_or_else(|_| Self::default_api_url(&api_base));
        Self {
            api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            api_url,
            model: env::var("MODEL_PRIMARY").unwrap_or_default(),
            api_base,
        }
    }

    // Endpoint used when GEMINI_API_URL is not set.
    pub fn default_api_url(base: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", base, DEFAULT_MODEL)
    }
}
