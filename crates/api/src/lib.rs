//! Key-gated HTTP gateway over a read-only document store.
//!
//! Exposes store ping and a fixed single-document lookup behind the worker
//! gate, plus actuator-style health and Prometheus endpoints that bypass it.

pub mod config;
pub mod error;
pub mod gate;
pub mod health;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use document_store::DocumentStore;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use gate::GateKey;
use state::AppState;

/// Creates the Axum application router with all routes, the worker gate and shared state.
///
/// The gate wraps the whole router, so unknown paths are gated too.
pub fn create_app<S: DocumentStore + 'static>(
    state: Arc<AppState<S>>,
    gate_key: GateKey,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/actuator/prometheus", get(routes::metrics::prometheus))
        .with_state(metrics_handle);

    Router::new()
        .route("/gate/test", get(routes::gate::test))
        .route("/mongo/ping", get(routes::mongo::ping::<S>))
        .route("/ping", get(routes::mongo::ping::<S>))
        .route("/mongo/query", get(routes::mongo::query::<S>))
        .route("/query", get(routes::mongo::query::<S>))
        .route("/actuator/health", get(routes::health::aggregate::<S>))
        .route(
            "/actuator/health/mongoAtlas",
            get(routes::health::mongo::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(middleware::from_fn_with_state(
            gate_key,
            gate::require_worker_key,
        ))
        .layer(TraceLayer::new_for_http())
}
