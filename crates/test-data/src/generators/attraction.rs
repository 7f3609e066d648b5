//! Attraction payload generation.

use std::ops::RangeInclusive;

use rand::Rng;
use travel_api::types::{Category, NewAttraction};

use crate::fixtures::{ATTRACTION_NAMES, WHAT_TO_TAKE};
use crate::generators::date::random_future_date;
use crate::generators::location::random_address;
use crate::generators::random_text;
use crate::generators::sample::{SampleError, sample_category_ids, sample_items};

/// Configuration for attraction generation.
#[derive(Debug, Clone)]
pub struct AttractionGenConfig {
    /// Attraction names; one payload is generated per name.
    pub names: Vec<String>,
    /// Items visitors may be asked to bring.
    pub what_to_take: Vec<String>,
    /// Ticket price range.
    pub pricing: RangeInclusive<u32>,
}

impl Default for AttractionGenConfig {
    fn default() -> Self {
        Self {
            names: ATTRACTION_NAMES.iter().map(|n| n.to_string()).collect(),
            what_to_take: WHAT_TO_TAKE.iter().map(|n| n.to_string()).collect(),
            pricing: 1000..=20000,
        }
    }
}

/// Generates attractions with fake descriptions.
pub struct AttractionGenerator {
    config: AttractionGenConfig,
}

impl AttractionGenerator {
    /// Creates a new attraction generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: AttractionGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: AttractionGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single attraction.
    pub fn generate(
        &self,
        name: &str,
        categories: &[Category],
        rng: &mut impl Rng,
    ) -> Result<NewAttraction, SampleError> {
        let what_to_take = sample_items(
            &self.config.what_to_take,
            self.config.what_to_take.len(),
            rng,
        )?
        .into_iter()
        .cloned()
        .collect();

        Ok(NewAttraction {
            name: name.to_string(),
            date: random_future_date(rng),
            location: random_address(rng),
            found_in_attraction: random_text(rng),
            not_found_in_attraction: random_text(rng),
            categories: sample_category_ids(categories, rng)?,
            pricing: rng.gen_range(self.config.pricing.clone()).to_string(),
            description: random_text(rng),
            what_to_take,
        })
    }

    /// Generates one attraction per configured name.
    pub fn generate_batch(
        &self,
        categories: &[Category],
        rng: &mut impl Rng,
    ) -> Result<Vec<NewAttraction>, SampleError> {
        self.config
            .names
            .iter()
            .map(|name| self.generate(name, categories, rng))
            .collect()
    }
}

impl Default for AttractionGenerator {
    fn default() -> Self {
        Self::new()
    }
}
