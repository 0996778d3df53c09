//! opal-api
//!
//! HTTP surface for the Opal reimbursement classifier: rate-table and
//! service-vocabulary enumeration plus the classify endpoint, served as
//! axum routes under lambda_http.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod middleware;
pub mod routes;

/// Build the API router. Every handler is a pure function over the
/// compiled-in rate tables, so there is no shared state to inject.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/services", get(routes::services::list_services))
        .route("/rates/bundles", get(routes::rates::list_bundle_rates))
        .route("/rates/apg", get(routes::rates::list_apg_rates))
        .route("/billing/classify", post(routes::billing::classify_billing))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
}
