use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub env: String,
    pub debug: bool,
    pub port: u16,
    /// Public URL of this instance, used in generated example links.
    pub site_url: String,
    /// Error-reporting DSN; declared but not wired to a reporter.
    pub sentry_dsn: Option<String>,
    // Cache sizing knobs; no cache consumes them.
    pub request_cache_max_len: usize,
    pub request_cache_max_age_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            env: env::var("ENV").unwrap_or_else(|_| "dev".to_string()),
            debug: env::var("DEBUG")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            site_url: env::var("SITE_URL").unwrap_or_else(|_| "http://localhost".to_string()),
            sentry_dsn: env::var("SENTRY_DSN").ok(),
            request_cache_max_len: env::var("REQUEST_CACHE_MAX_LEN")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .context("REQUEST_CACHE_MAX_LEN must be a valid number")?,
            request_cache_max_age_seconds: env::var("REQUEST_CACHE_MAX_AGE_SECONDS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .context("REQUEST_CACHE_MAX_AGE_SECONDS must be a valid number")?,
        })
    }
}
