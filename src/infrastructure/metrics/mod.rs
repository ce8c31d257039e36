//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - Seat reservation attempts by outcome
//! - Conference creations and modifications by kind

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Reservation attempts - "created", "duplicate", "full"
pub static BOOKINGS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("bookings_total", "Total number of seat reservation attempts")
            .namespace("conference_booking"),
        &["outcome"],
    )
    .expect("Failed to create BOOKINGS_TOTAL metric")
});

/// Conference writes - "organized", "seats", "dates"
pub static CONFERENCE_CHANGES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "conference_changes_total",
            "Total number of conferences organized or modified",
        )
        .namespace("conference_booking"),
        &["kind"],
    )
    .expect("Failed to create CONFERENCE_CHANGES_TOTAL metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(BOOKINGS_TOTAL.clone()))
        .expect("Failed to register BOOKINGS_TOTAL");
    registry
        .register(Box::new(CONFERENCE_CHANGES_TOTAL.clone()))
        .expect("Failed to register CONFERENCE_CHANGES_TOTAL");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .expect("Failed to encode metrics");
    String::from_utf8(buffer).expect("Metrics should be valid UTF-8")
}

/// Record the outcome of a seat reservation attempt
pub fn record_booking(outcome: &str) {
    BOOKINGS_TOTAL.with_label_values(&[outcome]).inc();
}

/// Record a successful conference write
pub fn record_conference_change(kind: &str) {
    CONFERENCE_CHANGES_TOTAL.with_label_values(&[kind]).inc();
}
