//! engine/zstd.rs
//!
//! Zstandard binding for the [`Engine`] seam.
//!
//! Design notes:
//! - Wraps `zstd_safe::CCtx` / `zstd_safe::DCtx`; both free themselves on drop.
//! - zstd reports errors as wrapped `size_t` values; the positive error code is
//!   recovered by negation and passed through untouched.
//! - zstd parameters are always sticky, so `StickyParameters(true)` is a no-op.
//!   Non-sticky behavior is produced by the context resetting after each call.

use num_enum::TryFromPrimitive;
use zstd_safe::{CCtx, CParameter, DCtx, DParameter, FrameFormat, ResetDirective};

use crate::engine::types::{Engine, EngineError, EngineResult, Parameter};
use crate::utils::enum_name_or_hex;

/// zstd error codes this binding raises itself.
mod codes {
    pub const MAX_CODE: usize = 120;
    pub const PREFIX_UNKNOWN: u32 = 10;
    pub const PARAMETER_UNSUPPORTED: u32 = 40;
    pub const PARAMETER_OUT_OF_BOUND: u32 = 42;
}

/// Wire formats understood by the zstd engine.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum FormatVersion {
    /// Standard zstd frame, magic number included.
    Standard = 1,
    /// Frame without the 4-byte magic number.
    Magicless = 2,
}

impl FormatVersion {
    pub const DEFAULT: FormatVersion = FormatVersion::Standard;

    fn frame_format(self) -> FrameFormat {
        match self {
            FormatVersion::Standard => FrameFormat::One,
            FormatVersion::Magicless => FrameFormat::Magicless,
        }
    }

    fn resolve(raw: u32) -> Result<FrameFormat, EngineError> {
        FormatVersion::try_from_primitive(raw)
            .map(FormatVersion::frame_format)
            .map_err(|_| {
                log::debug!(
                    "zstd: rejecting format version {}",
                    enum_name_or_hex::<FormatVersion>(raw)
                );
                EngineError::new(codes::PARAMETER_OUT_OF_BOUND)
            })
    }
}

/// Little-endian zstd frame magic, absent from magicless frames.
const FRAME_MAGIC: [u8; 4] = 0xFD2F_B528u32.to_le_bytes();

/// Largest standard frame header, magic included.
const FRAME_HEADER_MAX: usize = 18;

/// Zstandard engine backed by `zstd-safe`.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZstdEngine;

#[inline]
fn translate(raw: zstd_safe::SafeResult) -> EngineResult {
    raw.map_err(|code| EngineError::new(code.wrapping_neg() as u32))
}

impl Engine for ZstdEngine {
    type Encoder = CCtx<'static>;
    type Decoder = DCtx<'static>;

    fn name() -> &'static str {
        "zstd"
    }

    fn create_encoder() -> Option<Self::Encoder> {
        CCtx::try_create()
    }

    fn create_decoder() -> Option<Self::Decoder> {
        DCtx::try_create()
    }

    fn set_encoder_parameter(encoder: &mut Self::Encoder, param: Parameter) -> EngineResult {
        let native = match param {
            Parameter::StickyParameters(_) => return Ok(0),
            Parameter::FormatVersion(raw) => CParameter::Format(FormatVersion::resolve(raw)?),
            Parameter::CompressionLevel(level) => {
                if level < zstd_safe::min_c_level() || level > zstd_safe::max_c_level() {
                    return Err(EngineError::new(codes::PARAMETER_OUT_OF_BOUND));
                }
                CParameter::CompressionLevel(level)
            }
        };
        translate(encoder.set_parameter(native))
    }

    fn set_decoder_parameter(decoder: &mut Self::Decoder, param: Parameter) -> EngineResult {
        let native = match param {
            Parameter::StickyParameters(_) => return Ok(0),
            Parameter::FormatVersion(raw) => DParameter::Format(FormatVersion::resolve(raw)?),
            Parameter::CompressionLevel(_) => {
                return Err(EngineError::new(codes::PARAMETER_UNSUPPORTED))
            }
        };
        translate(decoder.set_parameter(native))
    }

    fn reset_encoder(encoder: &mut Self::Encoder) -> EngineResult {
        translate(encoder.reset(ResetDirective::SessionAndParameters))
    }

    fn reset_decoder(decoder: &mut Self::Decoder) -> EngineResult {
        translate(decoder.reset(ResetDirective::SessionAndParameters))
    }

    fn compress(encoder: &mut Self::Encoder, dst: &mut [u8], src: &[u8]) -> EngineResult {
        translate(encoder.compress2(dst, src))
    }

    fn decompress(decoder: &mut Self::Decoder, dst: &mut [u8], src: &[u8]) -> EngineResult {
        translate(decoder.decompress(dst, src))
    }

    fn compress_bound(src_size: usize) -> usize {
        // Oversized inputs come back as a wrapped srcSize_wrong code.
        let bound = zstd_safe::compress_bound(src_size);
        if bound > codes::MAX_CODE.wrapping_neg() {
            usize::MAX
        } else {
            bound
        }
    }

    fn default_format_version() -> u32 {
        FormatVersion::DEFAULT as u32
    }

    fn default_compression_level() -> i32 {
        zstd_safe::CLEVEL_DEFAULT
    }

    fn error_name(err: EngineError) -> &'static str {
        zstd_safe::get_error_name((err.code() as usize).wrapping_neg())
    }

    fn decompressed_size(src: &[u8], format_version: u32) -> Result<Option<u64>, EngineError> {
        let parsed = match FormatVersion::resolve(format_version)? {
            FrameFormat::One => zstd_safe::get_frame_content_size(src),
            FrameFormat::Magicless => {
                let take = src.len().min(FRAME_HEADER_MAX - FRAME_MAGIC.len());
                let mut header = Vec::with_capacity(FRAME_HEADER_MAX);
                header.extend_from_slice(&FRAME_MAGIC);
                header.extend_from_slice(&src[..take]);
                zstd_safe::get_frame_content_size(&header)
            }
        };
        parsed.map_err(|_| EngineError::new(codes::PREFIX_UNKNOWN))
    }
}
