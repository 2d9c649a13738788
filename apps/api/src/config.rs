use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// When set, CORS is restricted to this origin; otherwise permissive.
    pub allowed_origin: Option<String>,
    /// Minimum number of extracted characters before a PDF is analyzable.
    pub min_text_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            allowed_origin: std::env::var("ALLOWED_ORIGIN").ok(),
            min_text_chars: std::env::var("MIN_TEXT_CHARS")
                .unwrap_or_else(|_| "50".to_string())
                .parse::<usize>()
                .context("MIN_TEXT_CHARS must be a non-negative integer")?,
        })
    }
}
