//! Role-typed user registrations built from fixtures.

use rand::Rng;
use travel_api::types::{Category, TouristRegistration, UserRegistration};

use crate::fixtures::{self, TOURIST};
use crate::generators::sample::{SampleError, sample_category_ids};

/// Builds the tourist, agency and business registrations for a run.
#[derive(Debug, Default)]
pub struct UserGenerator;

impl UserGenerator {
    /// Creates a new user generator.
    pub fn new() -> Self {
        Self
    }

    /// The fixture tourist with a random set of favourite categories.
    pub fn tourist(
        &self,
        categories: &[Category],
        rng: &mut impl Rng,
    ) -> Result<TouristRegistration, SampleError> {
        Ok(TouristRegistration {
            name: TOURIST.name.to_string(),
            lastname: TOURIST.lastname.to_string(),
            age: TOURIST.age,
            phone: TOURIST.phone.to_string(),
            email: TOURIST.email.to_string(),
            password: TOURIST.password.to_string(),
            favorite_categories: sample_category_ids(categories, rng)?,
        })
    }

    /// All three registrations, tourist first.
    pub fn generate(
        &self,
        categories: &[Category],
        rng: &mut impl Rng,
    ) -> Result<Vec<UserRegistration>, SampleError> {
        Ok(vec![
            UserRegistration::Tourist(self.tourist(categories, rng)?),
            UserRegistration::Agency(fixtures::agency()),
            UserRegistration::Business(fixtures::business()),
        ])
    }
}
