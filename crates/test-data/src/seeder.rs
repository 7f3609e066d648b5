//! Seeding workflow against the travelling backend.
//!
//! Steps run strictly in order, one request at a time. Every step logs its
//! outcome and the run carries on; only a missing category list stops it,
//! since every later payload needs category ids.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;
use tracing::{error, info, warn};
use travel_api::types::{AccountRegistration, Category, UserKind, UserRegistration};
use travel_api::{ApiError, TravelBackend};

use crate::fixtures::{self, CATEGORY_TITLES};
use crate::generators::{AttractionGenerator, EstablishmentGenerator, SampleError, UserGenerator};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Could not list categories: {0}")]
    CategoriesUnavailable(#[source] ApiError),
    #[error("No categories available after seeding")]
    NoCategories,
    #[error("Sampling failed: {0}")]
    Sample(#[from] SampleError),
}

/// What happened when registering one fixture user.
#[derive(Debug)]
pub enum UserOutcome {
    Created,
    /// The email was already present, so no registration was sent.
    AlreadyRegistered,
    Failed(ApiError),
}

impl UserOutcome {
    /// Whether the user can be expected to exist on the backend.
    pub fn is_available(&self) -> bool {
        !matches!(self, UserOutcome::Failed(_))
    }
}

/// Created/failed counts for a batch of entity creations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub created: usize,
    pub failed: usize,
}

/// Outcome of a seeding run.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub admin_created: bool,
    pub token_obtained: bool,
    /// Categories created during this run.
    pub categories_created: usize,
    /// Categories available for sampling.
    pub categories: Vec<Category>,
    pub users: Vec<(UserKind, UserOutcome)>,
    pub agency_id: Option<String>,
    pub business_id: Option<String>,
    pub attractions: Tally,
    pub establishments: Tally,
    /// Steps that could not run because their owner was unavailable.
    pub skipped: Vec<&'static str>,
}

impl SeedReport {
    /// Returns the registration outcome for the user of `kind`.
    pub fn user_outcome(&self, kind: UserKind) -> Option<&UserOutcome> {
        self.users
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, outcome)| outcome)
    }

    /// Logs a per-step summary of the run.
    pub fn log_summary(&self) {
        info!("Seed completed!");
        info!("  Admin created: {}", self.admin_created);
        info!("  Token obtained: {}", self.token_obtained);
        info!(
            "  Categories: {} ({} created)",
            self.categories.len(),
            self.categories_created
        );
        for (kind, outcome) in &self.users {
            info!("  User {kind}: {outcome:?}");
        }
        info!(
            "  Attractions: {} created, {} failed",
            self.attractions.created, self.attractions.failed
        );
        info!(
            "  Establishments: {} created, {} failed",
            self.establishments.created, self.establishments.failed
        );
        if !self.skipped.is_empty() {
            warn!("  Skipped: {}", self.skipped.join(", "));
        }
    }
}

/// Renders a backend error the way the step logs report it.
fn describe(err: &ApiError) -> String {
    match err.status() {
        Some(status) => format!("Código de resposta: {}", status.as_u16()),
        None => err.to_string(),
    }
}

/// Drives the seeding workflow against a [`TravelBackend`].
pub struct Seeder<B> {
    backend: B,
    admin: AccountRegistration,
    users: UserGenerator,
    attractions: AttractionGenerator,
    establishments: EstablishmentGenerator,
}

impl<B: TravelBackend> Seeder<B> {
    /// Creates a seeder with the fixture admin and default generators.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            admin: fixtures::admin(),
            users: UserGenerator::new(),
            attractions: AttractionGenerator::new(),
            establishments: EstablishmentGenerator::new(),
        }
    }

    /// Replaces the admin account used to obtain the token.
    pub fn with_admin(mut self, admin: AccountRegistration) -> Self {
        self.admin = admin;
        self
    }

    /// Replaces the attraction generator.
    pub fn with_attraction_generator(mut self, generator: AttractionGenerator) -> Self {
        self.attractions = generator;
        self
    }

    /// Replaces the establishment generator.
    pub fn with_establishment_generator(mut self, generator: EstablishmentGenerator) -> Self {
        self.establishments = generator;
        self
    }

    /// Returns the backend the seeder talks to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs every step in order and reports what happened.
    pub async fn run(&self, rng: &mut impl Rng) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport {
            admin_created: self.create_admin().await,
            ..SeedReport::default()
        };

        let token = self.obtain_token().await;
        report.token_obtained = token.is_some();
        let token = token.as_deref();

        let (categories, created) = self.ensure_categories(token).await?;
        report.categories_created = created;

        let registrations = self.users.generate(&categories, rng)?;
        report.users = self.register_users(token, &registrations).await;

        // Owners are resolved by email before any owned entity is posted.
        report.agency_id = self
            .resolve_owner(token, UserKind::Agency, &registrations, &report.users)
            .await;
        report.business_id = self
            .resolve_owner(token, UserKind::Business, &registrations, &report.users)
            .await;

        match report.agency_id.as_deref() {
            Some(agency_id) => {
                report.attractions = self
                    .create_attractions(token, agency_id, &categories, rng)
                    .await?;
            }
            None => {
                error!("Atrações não serão criadas: agência indisponível");
                report.skipped.push("attractions");
            }
        }

        match report.business_id.as_deref() {
            Some(business_id) => {
                report.establishments = self
                    .create_establishments(token, business_id, &categories, rng)
                    .await?;
            }
            None => {
                error!("Estabelecimentos não serão criados: comércio indisponível");
                report.skipped.push("establishments");
            }
        }

        report.categories = categories;
        Ok(report)
    }

    /// Registers the admin account. Failure is expected on re-runs.
    pub async fn create_admin(&self) -> bool {
        match self.backend.create_admin(&self.admin).await {
            Ok(()) => {
                info!("Usuário administrador cadastrado com sucesso!");
                true
            }
            Err(e) => {
                warn!(
                    "Falha ao cadastrar usuário administrador. {}",
                    describe(&e)
                );
                false
            }
        }
    }

    /// Logs in as the admin. Later calls go out unauthenticated without a token.
    pub async fn obtain_token(&self) -> Option<String> {
        match self
            .backend
            .login(&self.admin.email, &self.admin.password)
            .await
        {
            Ok(token) => {
                info!("Token obtido com sucesso!");
                Some(token)
            }
            Err(ApiError::MissingAccessToken) => {
                warn!("Falha ao obter token. Resposta não contém 'access_token'.");
                None
            }
            Err(e) => {
                warn!("Falha ao obter token. {}", describe(&e));
                None
            }
        }
    }

    /// Returns the backend's categories, seeding the fixture titles first
    /// if there are none. Also returns how many were created.
    pub async fn ensure_categories(
        &self,
        token: Option<&str>,
    ) -> Result<(Vec<Category>, usize), SeedError> {
        let existing = self.list_categories().await?;
        if !existing.is_empty() {
            info!("Categorias foram encontradas!");
            return Ok((existing, 0));
        }

        info!("Categorias não encontradas!");
        let created = self.seed_categories(token).await;

        let categories = self.list_categories().await?;
        if categories.is_empty() {
            return Err(SeedError::NoCategories);
        }
        Ok((categories, created))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, SeedError> {
        self.backend.list_categories().await.map_err(|e| {
            error!("Falha ao buscar as categorias! {}", describe(&e));
            SeedError::CategoriesUnavailable(e)
        })
    }

    /// Creates every fixture category, one request each.
    pub async fn seed_categories(&self, token: Option<&str>) -> usize {
        let mut created = 0;

        for title in CATEGORY_TITLES {
            match self.backend.create_category(token, title).await {
                Ok(()) => {
                    info!("Categoria '{title}' cadastrada com sucesso!");
                    created += 1;
                }
                Err(e) => {
                    warn!("Falha ao cadastrar categoria '{title}'. {}", describe(&e));
                }
            }
        }

        created
    }

    /// Registers each user whose email the backend does not know yet.
    pub async fn register_users(
        &self,
        token: Option<&str>,
        registrations: &[UserRegistration],
    ) -> Vec<(UserKind, UserOutcome)> {
        let existing: HashSet<String> = match self.backend.list_users(token).await {
            Ok(users) => users.into_iter().map(|u| u.email).collect(),
            Err(e) => {
                warn!(
                    "Falha ao listar usuários existentes, todos serão cadastrados. {}",
                    describe(&e)
                );
                HashSet::new()
            }
        };

        let mut outcomes = Vec::with_capacity(registrations.len());
        for registration in registrations {
            let kind = registration.kind();

            let outcome = if existing.contains(registration.email()) {
                info!(
                    "Usuário do tipo {kind} já cadastrado: {}",
                    registration.email()
                );
                UserOutcome::AlreadyRegistered
            } else {
                match self.backend.register_user(registration).await {
                    Ok(()) => {
                        info!("Usuário do tipo {kind} criado com sucesso!");
                        UserOutcome::Created
                    }
                    Err(e) => {
                        warn!("Falha ao criar o usuário do tipo {kind}. {}", describe(&e));
                        UserOutcome::Failed(e)
                    }
                }
            };
            outcomes.push((kind, outcome));
        }

        outcomes
    }

    /// Looks up the server id of the registered user of `kind`.
    ///
    /// Users whose registration failed are not looked up.
    async fn resolve_owner(
        &self,
        token: Option<&str>,
        kind: UserKind,
        registrations: &[UserRegistration],
        outcomes: &[(UserKind, UserOutcome)],
    ) -> Option<String> {
        let registration = registrations.iter().find(|r| r.kind() == kind)?;
        let available = outcomes
            .iter()
            .any(|(k, outcome)| *k == kind && outcome.is_available());
        if !available {
            error!("Usuário do tipo {kind} não foi cadastrado, busca ignorada");
            return None;
        }

        let email = registration.email();
        match self.backend.find_user_by_email(token, email).await {
            Ok(user) => {
                info!("Usuário {email} foi encontrado!");
                Some(user.id)
            }
            Err(e) => {
                error!("Falha ao buscar o usuário: {email}! {}", describe(&e));
                None
            }
        }
    }

    /// Generates and posts attractions owned by `agency_id`.
    pub async fn create_attractions(
        &self,
        token: Option<&str>,
        agency_id: &str,
        categories: &[Category],
        rng: &mut impl Rng,
    ) -> Result<Tally, SeedError> {
        let attractions = self.attractions.generate_batch(categories, rng)?;
        let mut tally = Tally::default();

        for attraction in &attractions {
            match self
                .backend
                .create_attraction(token, agency_id, attraction)
                .await
            {
                Ok(()) => {
                    info!("Atração {} criada com sucesso!", attraction.name);
                    tally.created += 1;
                }
                Err(e) => {
                    warn!(
                        "Erro ao criar a atração: {}! {}",
                        attraction.name,
                        describe(&e)
                    );
                    tally.failed += 1;
                }
            }
        }

        Ok(tally)
    }

    /// Generates and posts establishments owned by `business_id`.
    pub async fn create_establishments(
        &self,
        token: Option<&str>,
        business_id: &str,
        categories: &[Category],
        rng: &mut impl Rng,
    ) -> Result<Tally, SeedError> {
        let establishments = self.establishments.generate_batch(categories, rng)?;
        let mut tally = Tally::default();

        for establishment in &establishments {
            match self
                .backend
                .create_establishment(token, business_id, establishment)
                .await
            {
                Ok(()) => {
                    info!("Estabelecimento {} criado com sucesso!", establishment.name);
                    tally.created += 1;
                }
                Err(e) => {
                    warn!(
                        "Erro ao criar o estabelecimento: {}! {}",
                        establishment.name,
                        describe(&e)
                    );
                    tally.failed += 1;
                }
            }
        }

        Ok(tally)
    }
}
