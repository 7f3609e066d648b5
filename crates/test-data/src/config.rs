//! Configuration for seeding runs.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use travel_api::DEFAULT_BASE_URL;

/// Environment variable overriding the backend URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Environment variable holding a `u64` seed for reproducible runs.
pub const SEED_VAR: &str = "SEED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
}

/// Configuration for a seeding run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Base URL of the travelling backend.
    pub base_url: String,

    /// Seed for the random source. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            seed: None,
        }
    }
}

impl SeedConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup,
    /// falling back to the defaults for anything unset or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(BACKEND_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(SEED_VAR).filter(|v| !v.trim().is_empty()) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?;
            config.seed = Some(seed);
        }

        Ok(config)
    }

    /// Sets a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the random source for this run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
