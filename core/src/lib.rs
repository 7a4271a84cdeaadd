//! zbridge-core
//!
//! Lifecycle-safe adapter over a native compression engine.
//! - A [`Context`] owns one encode and one decode session.
//! - Operations return tagged results; [`result::to_signed`] collapses them
//!   to the signed convention used by the C surface in `zbridge-capi`.
//!
//! ```no_run
//! use zbridge_core::{compress_bound, Context};
//!
//! let mut ctx = Context::new()?;
//! let src = b"AAAAAAAAAA";
//! let mut packed = vec![0u8; compress_bound(src.len())];
//! let n = ctx.compress(&mut packed, src)?;
//!
//! let mut restored = [0u8; 10];
//! assert_eq!(ctx.decompress(&mut restored, &packed[..n])?, 10);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub mod constants;
pub mod types;
pub mod utils;

pub mod bounds;
pub mod context;
pub mod engine;
pub mod result;
pub mod telemetry;

pub use bounds::{compress_bound, decompressed_size};
pub use context::{Context, ContextConfig, ResolvedConfig};
pub use engine::{Engine, EngineError, FormatVersion, Parameter, ZstdEngine};
pub use result::{OpError, OpResult};
pub use types::{ContextError, HandleKind};
