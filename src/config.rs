use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::core::money::Money;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    /// Largest custom-split mismatch, in minor units, that may be folded into a share
    pub split_tolerance_minor: i64,
    pub near_limit_percent: u32,
    pub summary_cache_ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            log_level: "info".to_string(),
            split_tolerance_minor: 0,
            near_limit_percent: 90,
            summary_cache_ttl_secs: 300,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();
        let defaults = Config::default();

        Self {
            port: env_or("PORT", defaults.port),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            split_tolerance_minor: env_or("SPLIT_TOLERANCE_MINOR", defaults.split_tolerance_minor).max(0),
            near_limit_percent: env_or("BUDGET_NEAR_LIMIT_PERCENT", defaults.near_limit_percent),
            summary_cache_ttl_secs: env_or("SUMMARY_CACHE_TTL_SECS", defaults.summary_cache_ttl_secs),
        }
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            split_tolerance: Money::from_minor(self.split_tolerance_minor),
            near_limit_percent: self.near_limit_percent,
            summary_ttl: Duration::from_secs(self.summary_cache_ttl_secs),
        }
    }
}

/// The subset of configuration the service needs, passed in explicitly so
/// the service never reads the process environment itself.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub split_tolerance: Money,
    pub near_limit_percent: u32,
    pub summary_ttl: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Config::default().service_settings()
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
