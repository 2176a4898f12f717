use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::client::DEFAULT_SEARCH_URL;

pub struct Config {
    pub api_key: String,
    pub search_url: String,
}

impl Config {
    /// Read settings from the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Config> {
        dotenv().ok();
        Ok(Config {
            api_key: get_env("TAVILY_API_KEY")?,
            search_url: get_env_or_default("TAVILY_SEARCH_URL", DEFAULT_SEARCH_URL),
        })
    }
}

fn get_env(key: &str) -> Result<String> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("Missing required environment variable: {key}"))
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
