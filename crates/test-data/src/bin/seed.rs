//! Seeds a local travelling backend with sample data.
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```
//!
//! `BACKEND_URL` overrides the backend address and `SEED` makes the
//! generated payloads reproducible.

use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env()?;
    tracing::info!("Seeding backend at {}", config.base_url);

    let mut rng = config.rng();
    let seeder = Seeder::new(ApiClient::new(config.base_url.as_str()));

    let report = seeder.run(&mut rng).await?;
    report.log_summary();

    Ok(())
}
