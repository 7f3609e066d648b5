//! Payload generators for seeding.
//!
//! - [`UserGenerator`]: tourist, agency and business registrations
//! - [`AttractionGenerator`]: attractions owned by an agency
//! - [`EstablishmentGenerator`]: establishments owned by a business
//!
//! The [`date`], [`sample`] and [`location`] modules hold the randomized
//! building blocks the generators share.

pub mod attraction;
pub mod date;
pub mod establishment;
pub mod location;
pub mod sample;
pub mod user;

use fake::Fake;
use fake::faker::lorem::pt_br::Paragraph;
use rand::Rng;

pub use attraction::{AttractionGenConfig, AttractionGenerator};
pub use date::{random_future_date, random_future_datetime};
pub use establishment::{EstablishmentGenConfig, EstablishmentGenerator};
pub use location::random_address;
pub use sample::{SampleError, sample_category_ids, sample_items, sample_open_days};
pub use user::UserGenerator;

/// A short paragraph of filler text.
pub(crate) fn random_text(rng: &mut impl Rng) -> String {
    Paragraph(1..3).fake_with_rng(rng)
}
