//! telemetry/snapshot.rs
//! Immutable view of a context's counters with derived ratios.

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::ContextCounters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub engine: String,
    pub counters: ContextCounters,
    /// `bytes_compressed_out / bytes_plaintext_in`; above 1.0 when output expanded.
    pub compression_ratio: f64,
    /// Fraction of calls that failed.
    pub failure_rate: f64,
}

impl TelemetrySnapshot {
    pub fn from(engine: &str, counters: &ContextCounters) -> Self {
        let compression_ratio = if counters.bytes_plaintext_in > 0 {
            counters.bytes_compressed_out as f64 / counters.bytes_plaintext_in as f64
        } else {
            0.0
        };

        let calls = counters.total_calls();
        let failure_rate = if calls > 0 {
            counters.total_failures() as f64 / calls as f64
        } else {
            0.0
        };

        Self {
            engine: engine.to_string(),
            counters: counters.clone(),
            compression_ratio,
            failure_rate,
        }
    }

    // - failures never exceed calls
    pub fn sanity_check(&self) -> bool {
        self.counters.compress_failures <= self.counters.compress_calls
            && self.counters.decompress_failures <= self.counters.decompress_calls
    }
}
