//! Client for the travelling backend REST API.
//!
//! [`TravelBackend`] describes the endpoints the seeder consumes;
//! [`ApiClient`] implements it over HTTP with reqwest.

pub mod backend;
pub mod client;
pub mod errors;
pub mod types;

pub use backend::TravelBackend;
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use errors::ApiError;
pub use reqwest::StatusCode;
