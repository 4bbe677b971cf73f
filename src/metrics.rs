// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Metrics instrumentation for redisearch-client.
//!
//! Uses the `metrics` crate for backend-agnostic metrics collection.
//! The host process is responsible for choosing the exporter (Prometheus, OTEL, etc.)
//!
//! # Metric Naming Convention
//! - `redisearch_client_` prefix for all metrics
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Labels
//! - `command`: FT.SEARCH, FT.ADD, ...
//! - `status`: success, protocol_error, transport_error
//! - `entry`: parser entry point that rejected a reply

use metrics::{counter, histogram};
use std::time::{Duration, Instant};

/// Record a command outcome
pub fn record_command(command: &str, status: &str) {
    counter!(
        "redisearch_client_commands_total",
        "command" => command.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record command round-trip latency
pub fn record_latency(command: &str, duration: Duration) {
    histogram!(
        "redisearch_client_command_seconds",
        "command" => command.to_string()
    )
    .record(duration.as_secs_f64());
}

/// Record a reply the parser could not decode
pub fn record_decode_error(entry: &str) {
    counter!(
        "redisearch_client_decode_errors_total",
        "entry" => entry.to_string()
    )
    .increment(1);
}

/// Record number of records returned by a search
pub fn record_search_results(count: usize) {
    histogram!("redisearch_client_search_results").record(count as f64);
}

/// A timing guard that records latency on drop
pub struct LatencyTimer {
    command: &'static str,
    start: Instant,
}

impl LatencyTimer {
    /// Start a new latency timer
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            start: Instant::now(),
        }
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        record_latency(self.command, self.start.elapsed());
    }
}
