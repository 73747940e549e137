use async_trait::async_trait;
use mongodb::bson::Document;

use crate::{Filter, Result};

/// Read-only access to a document database.
///
/// Implementations must be thread-safe (Send + Sync); a single instance is
/// shared by every request handler.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Issues a liveness command and returns the server's acknowledgement document.
    async fn ping(&self) -> Result<Document>;

    /// Looks up at most one document in `collection` matching `filter`.
    ///
    /// Returns `Ok(None)` when nothing matches; that is not an error.
    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>>;
}
