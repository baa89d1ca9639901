//! Metric names and instruments recorded by the server

use opentelemetry::KeyValue;
use opentelemetry::metrics::Counter;
use opentelemetry_semantic_conventions::attribute::HTTP_RESPONSE_STATUS_CODE;

/// Translated failures, by status and taxonomy category
pub const HTTP_ERROR_COUNT: &str = "http.server.error.count";

/// Attribute carrying the taxonomy category of a failure
pub const ERROR_CATEGORY: &str = "error.category";

/// Counter of failures rendered as error envelopes
///
/// Bound to the global meter provider, so it is a no-op until OTLP
/// metrics are configured.
pub fn error_counter() -> Counter<u64> {
    opentelemetry::global::meter("dbfront")
        .u64_counter(HTTP_ERROR_COUNT)
        .with_description("Failures translated into error responses")
        .build()
}

/// Record one translated failure
pub fn record_error(counter: &Counter<u64>, status: u16, category: &'static str) {
    counter.add(1, &error_attributes(status, category));
}

fn error_attributes(status: u16, category: &'static str) -> [KeyValue; 2] {
    [
        KeyValue::new(HTTP_RESPONSE_STATUS_CODE, i64::from(status)),
        KeyValue::new(ERROR_CATEGORY, category),
    ]
}
