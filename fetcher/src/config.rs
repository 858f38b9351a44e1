use crate::error::ConfigError;
use env_logger::{Builder, Target};
use log::{info, warn, LevelFilter};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_MAX_RESULTS: usize = 500;
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;
pub const DEFAULT_OUTPUT_FILE: &str = "youtube_data.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base_url: String,
    pub max_results: usize,
    pub request_delay: Duration,
    pub output_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingCredential(API_KEY_VAR))?;

        let api_base_url = lookup("YOUTUBE_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let max_results = parse_or_default(&lookup, "MAX_RESULTS", DEFAULT_MAX_RESULTS);
        let delay_ms = parse_or_default(&lookup, "REQUEST_DELAY_MS", DEFAULT_REQUEST_DELAY_MS);

        let output_file = lookup("OUTPUT_FILE")
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string())
            .into();

        Ok(Config {
            api_key,
            api_base_url,
            max_results,
            request_delay: Duration::from_millis(delay_ms),
            output_file,
        })
    }
}

fn parse_or_default<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!("Ignoring invalid {name}={raw:?}, using {default}");
            default
        }),
        None => default,
    }
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(Target::Stdout)
        .init();
    info!("Starting YouTube dataset fetcher...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}
