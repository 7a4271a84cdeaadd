//! engine/mod.rs
//! Native compression engines reachable through the adapter.
//!
//! The adapter only ever talks to the [`Engine`] trait; `ZstdEngine` is the
//! binding used by default.

pub mod types;
pub mod zstd;

pub use types::*;
pub use self::zstd::{FormatVersion, ZstdEngine};
