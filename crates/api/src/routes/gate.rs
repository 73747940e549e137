//! Gate pass-through check.

/// GET /gate/test — answers `OK` once the worker gate lets the request through.
pub async fn test() -> &'static str {
    "OK"
}
