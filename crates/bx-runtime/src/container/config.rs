//! # Runtime Configuration
//!
//! Defaults mirror the serving layer's historical behavior. Every value can be
//! overridden through a `BX_*` environment variable; malformed overrides are
//! logged and ignored.

use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable naming the JSON seed file.
pub const ENV_SEED_PATH: &str = "BX_SEED_PATH";
/// Environment variable overriding the top-referrer limit.
pub const ENV_TOP_REFERRERS: &str = "BX_TOP_REFERRERS";
/// Environment variable overriding the moving-average window.
pub const ENV_MOVING_AVERAGE_WINDOW: &str = "BX_MOVING_AVERAGE_WINDOW";
/// Environment variable overriding the default lower price bound.
pub const ENV_PRICE_MIN: &str = "BX_PRICE_MIN";
/// Environment variable overriding the default upper price bound.
pub const ENV_PRICE_MAX: &str = "BX_PRICE_MAX";

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuntimeConfig {
    /// Record store configuration.
    pub store: StoreConfig,
    /// Product search defaults.
    pub search: SearchConfig,
    /// Referral ranking configuration.
    pub referral: ReferralConfig,
    /// Activity metrics configuration.
    pub metrics: MetricsConfig,
}

impl RuntimeConfig {
    /// Loads defaults and applies overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads defaults and applies overrides from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_SEED_PATH) {
            info!(path = %path, "Using seed file from environment");
            config.store.seed_path = Some(PathBuf::from(path));
        }
        if let Some(limit) = parse_override(&lookup, ENV_TOP_REFERRERS) {
            config.referral.top_limit = limit;
        }
        if let Some(window) = parse_override(&lookup, ENV_MOVING_AVERAGE_WINDOW) {
            config.metrics.moving_average_window = window;
        }
        if let Some(min) = parse_override(&lookup, ENV_PRICE_MIN) {
            config.search.default_min_price = min;
        }
        if let Some(max) = parse_override(&lookup, ENV_PRICE_MAX) {
            config.search.default_max_price = max;
        }

        config
    }

    /// Rejects configurations the service cannot run with.
    ///
    /// # Errors
    /// - `InvertedPriceRange` if the default min price exceeds the max
    /// - `ZeroReferrerLimit` if the top-referrer limit is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let search = &self.search;
        if !(search.default_min_price <= search.default_max_price) {
            return Err(ConfigError::InvertedPriceRange {
                min: search.default_min_price,
                max: search.default_max_price,
            });
        }
        if self.referral.top_limit == 0 {
            return Err(ConfigError::ZeroReferrerLimit);
        }
        Ok(())
    }
}

fn parse_override<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring malformed configuration override");
            None
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Default price bounds are inverted (or NaN).
    #[error("Default price range is inverted: min {min} > max {max}")]
    InvertedPriceRange { min: f64, max: f64 },

    /// Top-referrer limit must be positive.
    #[error("Top-referrer limit must be at least 1")]
    ZeroReferrerLimit,
}

/// Record store configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreConfig {
    /// JSON seed document loaded at startup. `None` starts empty.
    pub seed_path: Option<PathBuf>,
}

/// Product search defaults, applied when a caller omits a bound.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub default_min_price: f64,
    pub default_max_price: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_min_price: 0.0,
            default_max_price: 10_000.0,
        }
    }
}

/// Referral ranking configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferralConfig {
    /// Number of referrers returned by `top_referrers`.
    pub top_limit: usize,
}

impl Default for ReferralConfig {
    fn default() -> Self {
        Self { top_limit: 5 }
    }
}

/// Activity metrics configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsConfig {
    /// Trailing window of the order-amount moving average.
    pub moving_average_window: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            moving_average_window: bx_01_scoring::DEFAULT_WINDOW,
        }
    }
}
