// src/config/mod.rs
// All tunables come from the environment, with a best-effort .env load

use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

/// Which extraction backend to wire up. A deployment-time choice, not a
/// runtime one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ExtractorKind {
    Claude,
    Langflow,
}

impl FromStr for ExtractorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "claude" => Ok(ExtractorKind::Claude),
            "langflow" => Ok(ExtractorKind::Langflow),
            other => Err(format!("unknown extractor kind '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // ── Extraction backend selection
    pub extractor: ExtractorKind,

    // ── Anthropic configuration (Variant A)
    pub anthropic_api_key: Option<String>,
    pub model: String,
    pub max_tokens: usize,

    // ── Langflow configuration (Variant B)
    pub langflow_api_url: Option<String>,

    // ── Timeouts (in seconds)
    pub request_timeout_secs: u64,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            extractor: env_var_or("TALLY_EXTRACTOR", ExtractorKind::Claude),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            model: env_var_or("TALLY_MODEL", "claude-3-7-sonnet-20250219".to_string()),
            max_tokens: env_var_or("TALLY_MAX_TOKENS", 1024),
            langflow_api_url: std::env::var("LANGFLOW_API_URL").ok(),
            request_timeout_secs: env_var_or("TALLY_REQUEST_TIMEOUT", 60),
        }
    }

    /// Timeout applied to each outbound extraction request.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
