use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static COFFEE_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "coffee_api_operations_total",
        "Coffee operations handled, by operation",
        &["op"]
    )
    .expect("register operations_total")
});

pub static STORE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "coffee_api_store_errors_total",
        "Requests that failed because the coffee store was unavailable"
    )
    .expect("register store_errors_total")
});

/// Count one handled operation (`list`, `get`, `create`, `upsert`, `delete`).
pub fn record_operation(op: &str) {
    COFFEE_OPERATIONS_TOTAL.with_label_values(&[op]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
