// src/config.rs

use std::{env, path::PathBuf, str::FromStr};
use dotenvy::dotenv;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RESULTS_REFRESH_SECS: u64 = 5;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub questions_file: PathBuf,
    pub results_file: PathBuf,
    /// Directory holding the browser client, served for every unmatched path.
    pub public_dir: PathBuf,
    /// Interval of the background reload of `results_file`. Zero disables it.
    pub results_refresh_secs: u64,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let questions_file = env::var("QUESTIONS_FILE")
            .unwrap_or_else(|_| "questions.json".to_string());

        let results_file = env::var("RESULTS_FILE")
            .unwrap_or_else(|_| "results.json".to_string());

        let public_dir = env::var("PUBLIC_DIR")
            .unwrap_or_else(|_| "public".to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            port: parse_or("PORT", DEFAULT_PORT),
            questions_file: questions_file.into(),
            results_file: results_file.into(),
            public_dir: public_dir.into(),
            results_refresh_secs: parse_or("RESULTS_REFRESH_SECS", DEFAULT_RESULTS_REFRESH_SECS),
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            rust_log,
        }
    }

    /// See [`invalid_numeric_vars`]; reads the process environment.
    pub fn invalid_vars() -> Vec<(&'static str, String)> {
        invalid_numeric_vars(|key| env::var(key).ok())
    }
}

/// Reads a numeric variable, falling back to `default` when unset or unparsable.
fn parse_or<T: FromStr + Copy>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

/// Numeric variables that are set but do not parse, as `(name, value)` pairs.
///
/// Config is read before logging is initialized, so `main` reports these afterwards.
pub fn invalid_numeric_vars<F>(lookup: F) -> Vec<(&'static str, String)>
where
    F: Fn(&str) -> Option<String>,
{
    let mut invalid = Vec::new();
    for key in ["PORT", "RESULTS_REFRESH_SECS", "MAX_UPLOAD_BYTES"] {
        let Some(raw) = lookup(key) else { continue };
        let valid = match key {
            "PORT" => raw.trim().parse::<u16>().is_ok(),
            "RESULTS_REFRESH_SECS" => raw.trim().parse::<u64>().is_ok(),
            _ => raw.trim().parse::<usize>().is_ok(),
        };
        if !valid {
            invalid.push((key, raw));
        }
    }
    invalid
}
