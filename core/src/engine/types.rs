//! engine/types.rs
//! The seam between the adapter and a native compression engine.
//!
//! Design notes:
//! - Handles are associated types; dropping one destroys it natively.
//! - Every fallible engine call yields `Result<usize, EngineError>`, the tagged
//!   form of the engine's own result representation.
//! - Error codes are carried as the engine reports them and never reinterpreted.

use std::fmt;

/// An error code reported by the engine.
///
/// The code is always the engine's positive numeric error identifier. Its
/// meaning is owned by the engine; use [`Engine::error_name`] for a message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EngineError {
    code: u32,
}

impl EngineError {
    pub const fn new(code: u32) -> Self {
        Self { code }
    }

    pub const fn code(&self) -> u32 {
        self.code
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "engine error code {}", self.code)
    }
}

impl std::error::Error for EngineError {}

/// Result of a single engine call: bytes processed, or the engine's error.
pub type EngineResult = Result<usize, EngineError>;

/// Parameters the adapter applies to a handle at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Parameter {
    /// Whether configured parameters survive past a single operation.
    StickyParameters(bool),
    /// Wire format version produced (encoder) or accepted (decoder).
    FormatVersion(u32),
    /// Encoder compression level.
    CompressionLevel(i32),
}

impl Parameter {
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::StickyParameters(_) => "sticky_parameters",
            Parameter::FormatVersion(_) => "format_version",
            Parameter::CompressionLevel(_) => "compression_level",
        }
    }
}

/// A native compression engine with separate encode and decode sessions.
///
/// Implementations hold no state of their own; all session state lives in the
/// handles. A handle is only ever used through `&mut`, so a single handle is
/// never driven from two threads at once.
pub trait Engine {
    /// Encode-session handle. Dropping it releases the native session.
    type Encoder;
    /// Decode-session handle. Dropping it releases the native session.
    type Decoder;

    /// Short engine name used in logs.
    fn name() -> &'static str;

    /// `None` signals that the engine could not allocate the session.
    fn create_encoder() -> Option<Self::Encoder>;
    fn create_decoder() -> Option<Self::Decoder>;

    fn set_encoder_parameter(encoder: &mut Self::Encoder, param: Parameter) -> EngineResult;
    fn set_decoder_parameter(decoder: &mut Self::Decoder, param: Parameter) -> EngineResult;

    /// Drop any session state and restore engine-default parameters.
    fn reset_encoder(encoder: &mut Self::Encoder) -> EngineResult;
    fn reset_decoder(decoder: &mut Self::Decoder) -> EngineResult;

    /// Compress `src` into `dst`, returning the number of bytes written.
    fn compress(encoder: &mut Self::Encoder, dst: &mut [u8], src: &[u8]) -> EngineResult;

    /// Decompress `src` into `dst`, returning the number of bytes written.
    fn decompress(decoder: &mut Self::Decoder, dst: &mut [u8], src: &[u8]) -> EngineResult;

    /// Worst-case compressed size for `src_size` bytes of input. Never fails;
    /// inputs beyond what the engine accepts saturate to `usize::MAX`.
    fn compress_bound(src_size: usize) -> usize;

    fn default_format_version() -> u32;
    fn default_compression_level() -> i32;

    /// Human-readable message for an engine error code.
    fn error_name(err: EngineError) -> &'static str;

    /// Decompressed size recorded in a frame header written in `format_version`.
    ///
    /// `Ok(None)` means the frame is valid but does not record its size.
    fn decompressed_size(src: &[u8], format_version: u32) -> Result<Option<u64>, EngineError>;
}
