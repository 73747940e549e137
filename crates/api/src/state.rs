//! Shared application state.

use std::sync::Arc;

use document_store::{DocumentStore, Filter};

/// The fixed lookup served by `/query` and `/mongo/query`.
#[derive(Debug, Clone)]
pub struct FixedQuery {
    pub collection: String,
    pub filter: Filter,
}

/// Shared application state accessible from all handlers.
pub struct AppState<S: DocumentStore> {
    pub store: S,
    pub query: FixedQuery,
}

impl<S: DocumentStore> AppState<S> {
    pub fn new(store: S, query: FixedQuery) -> Arc<Self> {
        Arc::new(Self { store, query })
    }
}
