use chrono::Datelike;
use serde::Deserialize;

use crate::services::recommendations::{DEFAULT_EXPLORE_STRENGTH, DEFAULT_RESULT_COUNT, RECENT_YEARS};

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON catalog to serve instead of the built-in demo list
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Pins the reference year; defaults to the current UTC year
    #[serde(default)]
    pub current_year: Option<i32>,

    /// Window used by the recent-only filter and the recency bonus
    #[serde(default = "default_recent_years")]
    pub recent_years: i32,

    /// Number of recommendations returned when the request omits `k`
    #[serde(default = "default_result_count")]
    pub default_result_count: usize,

    /// Upper bound accepted for `k`
    #[serde(default = "default_max_result_count")]
    pub max_result_count: usize,

    /// Discovery strength used when the request omits it
    #[serde(default = "default_explore_strength")]
    pub default_explore_strength: f64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_recent_years() -> i32 {
    RECENT_YEARS
}

fn default_result_count() -> usize {
    DEFAULT_RESULT_COUNT
}

fn default_max_result_count() -> usize {
    10
}

fn default_explore_strength() -> f64 {
    DEFAULT_EXPLORE_STRENGTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_path: None,
            current_year: None,
            recent_years: default_recent_years(),
            default_result_count: default_result_count(),
            max_result_count: default_max_result_count(),
            default_explore_strength: default_explore_strength(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if let Some(year) = self.current_year {
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                anyhow::bail!(
                    "CURRENT_YEAR must lie in {}..={}, got {}",
                    MIN_YEAR,
                    MAX_YEAR,
                    year
                );
            }
        }
        if self.recent_years < 0 {
            anyhow::bail!("RECENT_YEARS must not be negative");
        }
        if self.max_result_count == 0 {
            anyhow::bail!("MAX_RESULT_COUNT must be at least 1");
        }
        if self.default_result_count == 0 || self.default_result_count > self.max_result_count {
            anyhow::bail!(
                "DEFAULT_RESULT_COUNT must lie in 1..={}",
                self.max_result_count
            );
        }
        Ok(())
    }

    /// Reference year for recency decisions
    pub fn reference_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| chrono::Utc::now().year())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
