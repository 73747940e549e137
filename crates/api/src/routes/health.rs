//! Actuator-style health endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use document_store::DocumentStore;

use crate::health::{self, ComponentReport, HealthReport, MONGO_COMPONENT};
use crate::state::AppState;

/// GET /actuator/health — aggregate status of every component.
pub async fn aggregate<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> (StatusCode, Json<HealthReport>) {
    let mongo = health::check(&state.store).await;
    let report = HealthReport::from_components(BTreeMap::from([(MONGO_COMPONENT, mongo.report())]));
    (report.status_code(), Json(report))
}

/// GET /actuator/health/mongoAtlas — status of the store alone.
pub async fn mongo<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> (StatusCode, Json<ComponentReport>) {
    let mongo = health::check(&state.store).await;
    (mongo.status_code(), Json(mongo.report()))
}
