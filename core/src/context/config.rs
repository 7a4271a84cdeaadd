//! context/config.rs
//! Construction-time configuration for a [`Context`](crate::context::Context).
//!
//! `None` fields resolve to the engine's own defaults when the context is built,
//! so a config value never bakes in one engine's numbers.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STICKY_PARAMETERS;
use crate::engine::Engine;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Keep parameters across operations instead of resetting after each call.
    pub sticky_parameters: bool,
    /// Wire format version. `None` → engine default.
    pub format_version: Option<u32>,
    /// Compression level. `None` → engine default.
    pub compression_level: Option<i32>,
}

impl ContextConfig {
    /// Sticky parameters, engine-default format version and level.
    pub const DEFAULT: ContextConfig = ContextConfig {
        sticky_parameters: DEFAULT_STICKY_PARAMETERS,
        format_version: None,
        compression_level: None,
    };

    pub fn with_sticky_parameters(mut self, sticky: bool) -> Self {
        self.sticky_parameters = sticky;
        self
    }

    pub fn with_format_version(mut self, version: u32) -> Self {
        self.format_version = Some(version);
        self
    }

    pub fn with_compression_level(mut self, level: i32) -> Self {
        self.compression_level = Some(level);
        self
    }

    /// Fill unset fields from engine `E`.
    pub fn resolve<E: Engine>(&self) -> ResolvedConfig {
        ResolvedConfig {
            sticky_parameters: self.sticky_parameters,
            format_version: self.format_version.unwrap_or_else(E::default_format_version),
            compression_level: self
                .compression_level
                .unwrap_or_else(E::default_compression_level),
        }
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration with every value fixed, as applied to a live context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub sticky_parameters: bool,
    pub format_version: u32,
    pub compression_level: i32,
}
