use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramTimer, HistogramVec, IntCounterVec, TextEncoder,
};

// Prometheus metrics (default registry)
pub static USER_OPS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "college_directory_user_ops_total",
        "Total user directory operations handled",
        &["op"]
    )
    .expect("register user_ops_total")
});

pub static USER_NOT_FOUND_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "college_directory_user_not_found_total",
        "Keyed user operations that found no record",
        &["op"]
    )
    .expect("register user_not_found_total")
});

pub static USER_OP_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "college_directory_user_op_duration_seconds",
        "User directory operation duration in seconds",
        &["op"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]
    )
    .expect("register user_op_duration")
});

/// Count one operation and time it until the returned guard drops.
pub fn track(op: &str) -> HistogramTimer {
    USER_OPS_TOTAL.with_label_values(&[op]).inc();
    USER_OP_DURATION.with_label_values(&[op]).start_timer()
}

pub fn record_not_found(op: &str) {
    USER_NOT_FOUND_TOTAL.with_label_values(&[op]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
