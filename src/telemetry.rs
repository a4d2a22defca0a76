use lazy_static::lazy_static;
use prometheus::{register_int_counter, register_int_gauge, Encoder, IntCounter, IntGauge, TextEncoder};
use std::sync::atomic::{AtomicBool, Ordering};

static ENABLED: AtomicBool = AtomicBool::new(false);

lazy_static! {
    pub static ref SOLVE_CALLS: IntCounter =
        register_int_counter!("solve_calls_total", "Number of linear systems handed to the solver").unwrap();
    pub static ref SINGULAR_MATRICES: IntCounter =
        register_int_counter!("singular_matrices_total", "Number of solves aborted on a zero pivot").unwrap();
    pub static ref SESSION_ATTEMPTS: IntCounter =
        register_int_counter!("session_attempts_total", "Number of coefficient matrices drawn by sessions").unwrap();
    pub static ref DECODING_TIME_US: IntGauge =
        register_int_gauge!("decoding_time_us", "Duration of the last successful solve in microseconds").unwrap();
}

/// Evaluates the metric update only when collection has been switched on.
#[macro_export]
macro_rules! telemetry {
    ($e:expr) => {
        if $crate::telemetry::enabled() {
            $e;
        }
    };
}

pub fn enable() {
    ENABLED.store(true, Ordering::Relaxed);
}

pub fn enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Renders every registered metric in the Prometheus text format.
pub fn gather_text() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        log::error!("failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_appear_in_exposition_once_enabled() {
        enable();
        crate::telemetry!(SOLVE_CALLS.inc());
        let text = gather_text();
        assert!(text.contains("solve_calls_total"));
    }
}
