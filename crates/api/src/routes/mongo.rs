//! Store ping and fixed-document lookup endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use document_store::{Bson, Document, DocumentStore};

use crate::error::ApiError;
use crate::state::AppState;

/// Renders a BSON document as relaxed extended JSON.
fn to_json(document: Document) -> serde_json::Value {
    Bson::Document(document).into_relaxed_extjson()
}

/// GET /mongo/ping, GET /ping — returns the store's ping acknowledgement.
#[tracing::instrument(skip(state))]
pub async fn ping<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let ack = state.store.ping().await?;
    Ok(Json(to_json(ack)))
}

/// GET /mongo/query, GET /query — returns the configured document verbatim.
#[tracing::instrument(skip(state))]
pub async fn query<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let document = state
        .store
        .find_one(&state.query.collection, &state.query.filter)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(to_json(document)))
}
