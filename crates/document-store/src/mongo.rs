use std::time::Instant;

use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use crate::{DocumentStore, Filter, MongoConfig, Result, StoreError};

/// MongoDB-backed document store.
///
/// Cloning is cheap; the underlying [`Client`] shares one connection pool.
#[derive(Clone)]
pub struct MongoDocumentStore {
    client: Client,
    database: String,
}

impl MongoDocumentStore {
    /// Wraps an existing client, running every operation against `database`.
    pub fn new(client: Client, database: impl Into<String>) -> Self {
        Self {
            client,
            database: database.into(),
        }
    }

    /// Builds a client from `config`.
    ///
    /// The driver connects lazily, so an unreachable server is reported by the
    /// first operation rather than here.
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        if config.database.is_empty() {
            return Err(StoreError::Configuration(
                "database name must not be empty".to_string(),
            ));
        }

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.server_selection_timeout = Some(config.server_selection_timeout);
        if let Some(ref app_name) = config.app_name {
            options.app_name = Some(app_name.clone());
        }
        let client = Client::with_options(options)?;

        tracing::info!(database = %config.database, "mongodb client configured");
        Ok(Self::new(client, config.database.clone()))
    }

    /// Gets a reference to the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns a handle to the configured database.
    pub fn database(&self) -> Database {
        self.client.database(&self.database)
    }
}

fn record(op: &'static str, started: Instant, ok: bool) {
    let outcome = if ok { "ok" } else { "error" };
    metrics::counter!("store_operations_total", "op" => op, "outcome" => outcome).increment(1);
    metrics::histogram!("store_operation_duration_seconds", "op" => op)
        .record(started.elapsed().as_secs_f64());
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn ping(&self) -> Result<Document> {
        let started = Instant::now();
        let result = self.database().run_command(doc! { "ping": 1 }).await;
        record("ping", started, result.is_ok());
        Ok(result?)
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>> {
        let started = Instant::now();
        let result = self
            .database()
            .collection::<Document>(collection)
            .find_one(filter.to_document())
            .await;
        record("find_one", started, result.is_ok());
        tracing::debug!(collection, found = matches!(result, Ok(Some(_))), "find_one");
        Ok(result?)
    }
}
