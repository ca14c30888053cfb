//! # API REST
//!
//! REST API for the DME product catalog.
//!
//! Handles:
//! - HTTP endpoints with axum (`GET /api/products`, `GET /health`)
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (status codes, JSON bodies, CORS)
//!
//! Lookups themselves live in `dme-core`; this crate only maps their outcomes onto HTTP.

#![warn(rust_2018_idioms)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{ErrorRes, HealthRes, HealthService, ProductRecord};
use dme_core::{ErrorKind, LookupOutcome, LookupService, ResultRow};

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    lookup: Arc<LookupService>,
}

impl AppState {
    pub fn new(lookup: LookupService) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, query_products),
    components(schemas(HealthRes, ErrorRes, ProductRecord))
)]
pub struct ApiDoc;

type ApiError = (StatusCode, Json<ErrorRes>);

/// Build the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/products", get(query_products))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP status for a failed lookup.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidParameters => StatusCode::BAD_REQUEST,
        ErrorKind::ExecutionError | ErrorKind::ConfigurationError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API.
///
/// Used for monitoring and load balancer health checks. Does not contact the triple store.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("productId" = Option<String>, Query, description = "Catalog product identifier. Takes precedence over hcpcs and dx."),
        ("hcpcs" = Option<String>, Query, description = "HCPCS code. Takes precedence over dx."),
        ("dx" = Option<String>, Query, description = "Diagnosis code.")
    ),
    responses(
        (status = 200, description = "Matching catalog records", body = [ProductRecord]),
        (status = 400, description = "No identifier supplied", body = ErrorRes),
        (status = 500, description = "Triple store failure", body = ErrorRes)
    )
)]
/// Query the DME product catalog.
///
/// Exactly one identifier is used: `productId` if present, else `hcpcs`, else `dx`. Each record only
/// contains the fields that were bound for it.
///
/// # Errors
/// Returns `400 Bad Request` if none of the identifiers is supplied, and `500 Internal Server
/// Error` if the triple store query fails.
#[axum::debug_handler]
async fn query_products(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<ResultRow>>, ApiError> {
    tracing::info!("Processing DME product catalog query");

    let lookup = state.lookup.clone();
    let outcome = tokio::task::spawn_blocking(move || lookup.lookup(&params))
        .await
        .map_err(|e| {
            tracing::error!("Lookup task failed: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorRes::new("Error processing request: lookup task failed")),
            )
        })?;

    match outcome {
        LookupOutcome::Success(rows) => Ok(Json(rows)),
        LookupOutcome::Failure { kind, message } => {
            let status = status_for(kind);
            if status.is_server_error() {
                tracing::error!("Error processing request: {}", message);
            }
            Err((status, Json(ErrorRes::new(message))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_maps_error_kinds() {
        assert_eq!(status_for(ErrorKind::InvalidParameters), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(ErrorKind::ExecutionError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(ErrorKind::ConfigurationError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_openapi_documents_products_endpoint() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/products"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
