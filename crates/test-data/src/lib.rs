//! Test data seeding for the travelling backend.
//!
//! Populates a running backend with categories, a tourist, an agency and a
//! business user, and the attractions and establishments those users own.
//! Payloads are randomized from fixtures and fake data.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let mut rng = config.rng();
//!
//! let report = Seeder::new(ApiClient::new(&config.base_url))
//!     .run(&mut rng)
//!     .await?;
//! report.log_summary();
//! ```

pub mod config;
pub mod fixtures;
pub mod generators;
pub mod seeder;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, SeedConfig};
    pub use crate::generators::{
        AttractionGenerator, EstablishmentGenerator, SampleError, UserGenerator,
        random_future_date, sample_category_ids, sample_items, sample_open_days,
    };
    pub use crate::seeder::{SeedError, SeedReport, Seeder, Tally, UserOutcome};
    pub use travel_api::{ApiClient, ApiError, TravelBackend};
}
