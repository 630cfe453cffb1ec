use crate::models::FilterCriteria;
use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Filter environment variables and the criteria key each one feeds
const FILTER_VARS: [(&str, &str); 6] = [
    ("MARKET_FILTER_BRAND", "brand"),
    ("MARKET_FILTER_MODEL", "model"),
    ("MARKET_FILTER_LOCATION", "location"),
    ("MARKET_FILTER_CATEGORY", "category"),
    ("MARKET_FILTER_MIN_PRICE", "minPrice"),
    ("MARKET_FILTER_MAX_PRICE", "maxPrice"),
];

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub simulate_latency: bool,
    pub export_path: PathBuf,
    pub criteria: FilterCriteria,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let simulate_latency = match lookup("MARKET_SIMULATE_LATENCY") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("MARKET_SIMULATE_LATENCY must be a boolean, got {:?}", raw))?,
            None => true,
        };

        let export_path = lookup("MARKET_EXPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("listings.json"));

        // Malformed filter values degrade to "no constraint" inside from_pairs
        let criteria = FilterCriteria::from_pairs(
            FILTER_VARS
                .iter()
                .filter_map(|&(var, key)| lookup(var).map(|value| (key, value))),
        );

        Ok(Self {
            simulate_latency,
            export_path,
            criteria,
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("not a boolean: {}", other),
    }
}
