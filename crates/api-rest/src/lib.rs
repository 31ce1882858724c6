//! # API REST
//!
//! REST API implementation for the diagnoses service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (input validation, JSON bodies, status codes, CORS, timeouts)
//!
//! Uses `api-shared` for wire types and `diagnosis-core` for the actual work.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod diagnoses;
pub mod error;

pub use config::RestConfig;
pub use error::ApiError;

use api_shared::{
    AddDiagnosisReq, DiagnosisRes, GetDiagnosesRes, HealthRes, HealthService, HttpError,
};
use axum::http::{header, HeaderValue};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use diagnosis_core::Services;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// State shared across REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Patient Diagnoses API",
        version = "1.0.0",
        description = "API service to handle patient diagnoses"
    ),
    paths(health, diagnoses::add_diagnosis, diagnoses::get_diagnoses),
    components(schemas(
        HealthRes,
        AddDiagnosisReq,
        DiagnosisRes,
        GetDiagnosesRes,
        HttpError
    )),
    tags((name = "diagnosis", description = "Patient diagnoses"))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI and the middleware stack.
///
/// Every response defaults to `Content-Type: application/json`; requests that run longer than
/// `cfg.request_timeout()` are answered with `408 Request Timeout`. A panicking handler yields
/// the same `500` body as any other internal failure.
pub fn router(services: Services, cfg: &RestConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(cfg.request_timeout()))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ));

    Router::new()
        .route("/health", get(health))
        .route("/patient/diagnoses", get(diagnoses::get_diagnoses))
        .route("/patient/:patientID/diagnoses", post(diagnoses::add_diagnosis))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware)
        .with_state(AppState { services })
}

/// Binds `cfg.addr()` and serves `app` until SIGINT/SIGTERM.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails while running.
pub async fn serve(app: Router, cfg: &RestConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(cfg.addr()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to register SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping REST server");
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}
