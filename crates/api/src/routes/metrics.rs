//! Prometheus scrape endpoint under the actuator root.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// GET /actuator/prometheus — store, gate and request metrics in text exposition format.
///
/// The recorder is installed without a background upkeep task, so histogram
/// buckets are drained here on every scrape.
pub async fn prometheus(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    handle.run_upkeep();
    ([(CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], handle.render())
}
