//! Up/down health derived from a store ping.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use document_store::DocumentStore;
use serde::Serialize;

/// Name the store component is reported under.
pub const MONGO_COMPONENT: &str = "mongoAtlas";

/// Health of a single dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Health {
    Up,
    Down { error: String },
}

impl Health {
    pub fn is_up(&self) -> bool {
        matches!(self, Health::Up)
    }

    /// 200 when up, 503 when down.
    pub fn status_code(&self) -> StatusCode {
        if self.is_up() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }

    pub fn report(&self) -> ComponentReport {
        match self {
            Health::Up => ComponentReport {
                status: "UP",
                details: None,
            },
            Health::Down { error } => ComponentReport {
                status: "DOWN",
                details: Some(HealthDetails {
                    error: error.clone(),
                }),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthDetails {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ComponentReport {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HealthDetails>,
}

/// Aggregate report; the overall status is UP only if every component is.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub components: BTreeMap<&'static str, ComponentReport>,
}

impl HealthReport {
    pub fn from_components(components: BTreeMap<&'static str, ComponentReport>) -> Self {
        let status = if components.values().all(|c| c.status == "UP") {
            "UP"
        } else {
            "DOWN"
        };
        Self { status, components }
    }

    pub fn status_code(&self) -> StatusCode {
        if self.status == "UP" {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Pings the store and maps the outcome to [`Health`].
pub async fn check<S: DocumentStore + ?Sized>(store: &S) -> Health {
    match store.ping().await {
        Ok(_) => Health::Up,
        Err(err) => {
            tracing::warn!(error = %err, component = MONGO_COMPONENT, "health check failed");
            Health::Down {
                error: err.to_string(),
            }
        }
    }
}
