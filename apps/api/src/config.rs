use anyhow::{Context, Result};

/// Origins the dashboard dev servers run on.
const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:3001,http://localhost:3002,http://localhost:3003";

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare checkout starts with the bundled data paths.
#[derive(Debug, Clone)]
pub struct Config {
    pub rent_data_path: String,
    pub jobs_data_path: String,
    pub port: u16,
    pub rust_log: String,
    /// Empty means permissive (`CORS_ALLOWED_ORIGINS=*`).
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            rent_data_path: env_or("RENT_DATA_PATH", "data/avg_rent.csv"),
            jobs_data_path: env_or("JOBS_DATA_PATH", "data/jobs.csv"),
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            cors_allowed_origins: parse_origins(&env_or(
                "CORS_ALLOWED_ORIGINS",
                DEFAULT_CORS_ORIGINS,
            )),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    if raw.trim() == "*" {
        return Vec::new();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
