use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::RestConfig;
use diagnosis_core::{
    CoreConfig, MemoryRepository, Services,
    config::{seed_fixtures_from_env_value, update_attempts_from_env_value},
};

/// Main entry point for the diagnoses service
///
/// Builds the in-memory repository and the application services, then serves the REST API
/// until SIGINT/SIGTERM.
///
/// # Environment Variables
/// - `DIAGNOSIS_REST_ADDR`: REST server address (default: "0.0.0.0:8080")
/// - `DIAGNOSIS_REQUEST_TIMEOUT_SECS`: per-request timeout in seconds (default: 30)
/// - `DIAGNOSIS_SEED_FIXTURES`: seed the fixture patient (default: true)
/// - `DIAGNOSIS_UPDATE_ATTEMPTS`: retries for concurrent patient updates (default: 5)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - any configuration value is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("diagnosis=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let core_cfg = CoreConfig::new(
        seed_fixtures_from_env_value(std::env::var("DIAGNOSIS_SEED_FIXTURES").ok())?,
        update_attempts_from_env_value(std::env::var("DIAGNOSIS_UPDATE_ATTEMPTS").ok())?,
    )?;
    let rest_cfg = RestConfig::from_env_values(
        std::env::var("DIAGNOSIS_REST_ADDR").ok(),
        std::env::var("DIAGNOSIS_REQUEST_TIMEOUT_SECS").ok(),
    )?;

    tracing::info!("++ Starting diagnoses REST API on {}", rest_cfg.addr());

    let repository = Arc::new(MemoryRepository::from_config(&core_cfg));
    let services = Services::new(repository.clone(), repository, &core_cfg);

    let app = api_rest::router(services, &rest_cfg);
    api_rest::serve(app, &rest_cfg).await?;

    Ok(())
}
