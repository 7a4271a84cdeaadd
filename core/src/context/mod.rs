//! context/mod.rs
//! Context lifecycle, configuration, and the operations run against it.

pub mod config;
pub mod manager;
pub mod ops;

pub use config::*;
pub use manager::*;
