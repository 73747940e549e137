use thiserror::Error;

/// Errors that can occur when talking to the document store.
///
/// `Database` and `Unavailable` display the underlying message alone; HTTP
/// error bodies carry it verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The MongoDB driver reported a failure (network, auth, timeout, command error).
    #[error("{0}")]
    Database(#[from] mongodb::error::Error),

    /// The store could not be reached.
    #[error("{0}")]
    Unavailable(String),

    /// The store configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Result type for document store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_displays_message_only() {
        let err = StoreError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}
