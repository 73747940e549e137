pub mod config;
pub mod error;
pub mod filter;
pub mod memory;
pub mod mongo;
pub mod store;

pub use config::MongoConfig;
pub use error::{Result, StoreError};
pub use filter::Filter;
pub use memory::InMemoryDocumentStore;
pub use mongo::MongoDocumentStore;
pub use store::DocumentStore;

// Re-exported so callers can build and inspect documents without a direct bson dependency.
pub use mongodb::bson::{self, Bson, Document, doc};
