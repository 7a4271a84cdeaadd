//! telemetry/mod.rs
//! Per-context counters and immutable snapshots.
//!
//! Notes:
//! - Counters live inside the context and are updated by every operation,
//!   including failed ones; no locks or atomics since a context is never shared.
//! - Snapshots are plain values, safe to hand across threads or serialize.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
