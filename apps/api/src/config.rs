use anyhow::{Context, Result};

use crate::i18n::Language;

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_WORKSPACE_TTL_SECS: u64 = 60 * 60;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
    /// Display language a new workspace starts in when the client does not pick one.
    pub default_language: Language,
    pub max_upload_bytes: usize,
    /// Seconds a workspace may sit untouched before it is evicted.
    pub workspace_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_language: match std::env::var("DEFAULT_LANGUAGE") {
                Ok(code) => code
                    .parse::<Language>()
                    .context("DEFAULT_LANGUAGE must be 'ar' or 'en'")?,
                Err(_) => Language::default(),
            },
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            workspace_ttl_secs: match std::env::var("WORKSPACE_TTL_SECS") {
                Ok(raw) => raw
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .context("WORKSPACE_TTL_SECS must be a positive number of seconds")?,
                Err(_) => DEFAULT_WORKSPACE_TTL_SECS,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
impl Config {
    /// Configuration for router tests; never touches the environment.
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: "test-key".to_string(),
            gemini_api_base: DEFAULT_API_BASE.to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            default_language: Language::En,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            workspace_ttl_secs: DEFAULT_WORKSPACE_TTL_SECS,
        }
    }
}
