//! Fake Brazilian addresses.

use fake::Fake;
use fake::faker::address::pt_br::{BuildingNumber, CityName, StateAbbr, StreetName};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::fixtures::NEIGHBORHOODS;

/// Builds `Brasil, {UF}, {city}, {neighbourhood}, {street}, {number}`.
pub fn random_address(rng: &mut impl Rng) -> String {
    let state: String = StateAbbr().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let neighborhood = NEIGHBORHOODS.choose(rng).copied().unwrap_or("Centro");
    let street: String = StreetName().fake_with_rng(rng);
    let number: String = BuildingNumber().fake_with_rng(rng);

    format!("Brasil, {state}, {city}, {neighborhood}, {street}, {number}")
}
