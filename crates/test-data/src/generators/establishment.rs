//! Establishment payload generation.

use std::ops::RangeInclusive;

use rand::Rng;
use travel_api::types::{Category, NewEstablishment};

use crate::fixtures::ESTABLISHMENT_NAMES;
use crate::generators::date::random_future_date;
use crate::generators::location::random_address;
use crate::generators::random_text;
use crate::generators::sample::{SampleError, sample_category_ids, sample_open_days};

/// Configuration for establishment generation.
#[derive(Debug, Clone)]
pub struct EstablishmentGenConfig {
    /// Establishment names; one payload is generated per name.
    pub names: Vec<String>,
    pub min_price: RangeInclusive<u32>,
    pub max_price: RangeInclusive<u32>,
}

impl Default for EstablishmentGenConfig {
    fn default() -> Self {
        Self {
            names: ESTABLISHMENT_NAMES.iter().map(|n| n.to_string()).collect(),
            min_price: 80..=150,
            max_price: 160..=350,
        }
    }
}

/// Generates establishments with fake descriptions and opening days.
pub struct EstablishmentGenerator {
    config: EstablishmentGenConfig,
}

impl EstablishmentGenerator {
    /// Creates a new establishment generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: EstablishmentGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: EstablishmentGenConfig) -> Self {
        Self { config }
    }

    /// Generates the establishment at position `index` of the batch.
    ///
    /// The index is embedded in the phone number so every entry differs.
    pub fn generate(
        &self,
        index: usize,
        name: &str,
        categories: &[Category],
        rng: &mut impl Rng,
    ) -> Result<NewEstablishment, SampleError> {
        Ok(NewEstablishment {
            name: name.to_string(),
            description: random_text(rng),
            open_hours: random_future_date(rng),
            close_hours: random_future_date(rng),
            min_price: rng.gen_range(self.config.min_price.clone()).to_string(),
            max_price: rng.gen_range(self.config.max_price.clone()).to_string(),
            location: random_address(rng),
            open_days: sample_open_days(rng)?,
            found_in_establishment: random_text(rng),
            other_information: random_text(rng),
            phone: establishment_phone(index),
            categories: sample_category_ids(categories, rng)?,
        })
    }

    /// Generates one establishment per configured name.
    pub fn generate_batch(
        &self,
        categories: &[Category],
        rng: &mut impl Rng,
    ) -> Result<Vec<NewEstablishment>, SampleError> {
        self.config
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| self.generate(i, name, categories, rng))
            .collect()
    }
}

impl Default for EstablishmentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn establishment_phone(index: usize) -> String {
    format!("+550670{index}0099{index}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn categories() -> Vec<Category> {
        vec![Category {
            id: "c1".to_string(),
            title: "Restaurante".to_string(),
        }]
    }

    #[test]
    fn test_generate_batch() {
        let mut rng = rand::thread_rng();
        let establishments = EstablishmentGenerator::new()
            .generate_batch(&categories(), &mut rng)
            .unwrap();

        assert_eq!(establishments.len(), ESTABLISHMENT_NAMES.len());
        for e in &establishments {
            let min: u32 = e.min_price.parse().unwrap();
            let max: u32 = e.max_price.parse().unwrap();
            assert!((80..=150).contains(&min));
            assert!((160..=350).contains(&max));
            assert!(min < max);

            assert_eq!(e.categories, vec!["c1".to_string()]);
            assert!(!e.open_days.is_empty());
            assert!(e.open_days.windows(2).all(|w| w[0] < w[1]));
            assert!(e.open_hours.ends_with("-03:00"));
            assert!(e.close_hours.ends_with("-03:00"));
        }
    }

    #[test]
    fn test_phones_follow_index() {
        assert_eq!(establishment_phone(0), "+550670000990");
        assert_eq!(establishment_phone(3), "+550670300993");

        let mut rng = rand::thread_rng();
        let establishments = EstablishmentGenerator::new()
            .generate_batch(&categories(), &mut rng)
            .unwrap();
        let phones: HashSet<&str> = establishments.iter().map(|e| e.phone.as_str()).collect();
        assert_eq!(phones.len(), establishments.len());
    }
}
