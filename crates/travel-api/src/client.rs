//! HTTP implementation of [`TravelBackend`] on top of reqwest.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::backend::TravelBackend;
use crate::errors::ApiError;
use crate::types::{
    AccountRegistration, Category, LoginRequest, LoginResponse, NewAttraction, NewCategory,
    NewEstablishment, UserRecord, UserRegistration,
};

/// Default backend address used by the seed script.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Client for the travelling backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given backend URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the backend URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Attaches bearer auth when a token is available.
fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

/// Passes the response through if it carries the expected status.
async fn expect_status(resp: Response, expected: StatusCode) -> Result<Response, ApiError> {
    let status = resp.status();
    if status == expected {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Rejected { status, body })
}

/// Decodes a `GET /user/{email}` body.
///
/// Unknown emails come back as 200 with either an empty body or `null`.
fn parse_user_lookup(email: &str, body: &str) -> Result<UserRecord, ApiError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(ApiError::UserNotFound(email.to_string()));
    }
    let user: Option<UserRecord> = serde_json::from_str(body)?;
    user.ok_or_else(|| ApiError::UserNotFound(email.to_string()))
}

#[async_trait]
impl TravelBackend for ApiClient {
    async fn create_admin(&self, admin: &AccountRegistration) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.url("/user/admin"))
            .json(admin)
            .send()
            .await?;
        expect_status(resp, StatusCode::CREATED).await?;
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let resp = self
            .client
            .post(self.url("/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let resp = expect_status(resp, StatusCode::OK).await?;

        let login: LoginResponse = resp.json().await?;
        login.access_token.ok_or(ApiError::MissingAccessToken)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let resp = self.client.get(self.url("/category")).send().await?;
        let resp = expect_status(resp, StatusCode::OK).await?;
        Ok(resp.json().await?)
    }

    async fn create_category(&self, token: Option<&str>, title: &str) -> Result<(), ApiError> {
        let body = NewCategory {
            title: title.to_string(),
        };
        let resp = authorize(self.client.post(self.url("/category")), token)
            .json(&body)
            .send()
            .await?;
        expect_status(resp, StatusCode::CREATED).await?;
        Ok(())
    }

    async fn list_users(&self, token: Option<&str>) -> Result<Vec<UserRecord>, ApiError> {
        let resp = authorize(self.client.get(self.url("/user")), token)
            .send()
            .await?;
        let resp = expect_status(resp, StatusCode::OK).await?;
        Ok(resp.json().await?)
    }

    async fn register_user(&self, registration: &UserRegistration) -> Result<(), ApiError> {
        let url = self.url(registration.kind().endpoint());
        debug!("Registering {} user {}", registration.kind(), registration.email());

        let resp = self.client.post(url).json(registration).send().await?;
        expect_status(resp, StatusCode::CREATED).await?;
        Ok(())
    }

    async fn find_user_by_email(
        &self,
        token: Option<&str>,
        email: &str,
    ) -> Result<UserRecord, ApiError> {
        let url = self.url(&format!("/user/{email}"));
        let resp = authorize(self.client.get(url), token).send().await?;
        let resp = expect_status(resp, StatusCode::OK).await?;
        let body = resp.text().await?;
        parse_user_lookup(email, &body)
    }

    async fn create_attraction(
        &self,
        token: Option<&str>,
        agency_id: &str,
        attraction: &NewAttraction,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/attraction/{agency_id}"));
        let resp = authorize(self.client.post(url), token)
            .json(attraction)
            .send()
            .await?;
        expect_status(resp, StatusCode::CREATED).await?;
        Ok(())
    }

    async fn create_establishment(
        &self,
        token: Option<&str>,
        business_id: &str,
        establishment: &NewEstablishment,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/establishment/{business_id}"));
        let resp = authorize(self.client.post(url), token)
            .json(establishment)
            .send()
            .await?;
        expect_status(resp, StatusCode::CREATED).await?;
        Ok(())
    }
}
