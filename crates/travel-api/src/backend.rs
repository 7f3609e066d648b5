//! The backend contract consumed by the seeder.

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::types::{
    AccountRegistration, Category, NewAttraction, NewEstablishment, UserRecord, UserRegistration,
};

/// One method per backend endpoint. Every call is a single round trip
/// with no retry.
///
/// `token` is optional: without one the request is sent unauthenticated
/// and the backend decides whether to refuse it.
#[async_trait]
pub trait TravelBackend: Send + Sync {
    /// `POST /user/admin`, expects 201.
    async fn create_admin(&self, admin: &AccountRegistration) -> Result<(), ApiError>;

    /// `POST /login`, expects 200 with an `access_token`.
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError>;

    /// `GET /category`, expects 200. An empty list is a successful answer.
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// `POST /category`, expects 201.
    async fn create_category(&self, token: Option<&str>, title: &str) -> Result<(), ApiError>;

    /// `GET /user`, expects 200.
    async fn list_users(&self, token: Option<&str>) -> Result<Vec<UserRecord>, ApiError>;

    /// `POST /tourist|agency|business`, expects 201.
    async fn register_user(&self, registration: &UserRegistration) -> Result<(), ApiError>;

    /// `GET /user/{email}`, expects 200 with a non-null record.
    async fn find_user_by_email(
        &self,
        token: Option<&str>,
        email: &str,
    ) -> Result<UserRecord, ApiError>;

    /// `POST /attraction/{agencyId}`, expects 201.
    async fn create_attraction(
        &self,
        token: Option<&str>,
        agency_id: &str,
        attraction: &NewAttraction,
    ) -> Result<(), ApiError>;

    /// `POST /establishment/{businessId}`, expects 201.
    async fn create_establishment(
        &self,
        token: Option<&str>,
        business_id: &str,
        establishment: &NewEstablishment,
    ) -> Result<(), ApiError>;
}
