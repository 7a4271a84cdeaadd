//! bounds.rs
//! Worst-case output sizing. No context required.

use crate::engine::{Engine, EngineError, ZstdEngine};

/// Maximum bytes the default engine can write when compressing `src_size`
/// bytes of any input. A destination this large never fails for capacity.
#[inline]
pub fn compress_bound(src_size: usize) -> usize {
    compress_bound_for::<ZstdEngine>(src_size)
}

/// [`compress_bound`] for an explicit engine.
#[inline]
pub fn compress_bound_for<E: Engine>(src_size: usize) -> usize {
    E::compress_bound(src_size)
}

/// Decompressed size recorded in the frame header of `src`.
///
/// `Ok(None)` when the frame is valid but does not record its size.
/// Standard frame format is assumed; see [`decompressed_size_for`].
pub fn decompressed_size(src: &[u8]) -> Result<Option<u64>, EngineError> {
    decompressed_size_for::<ZstdEngine>(src, ZstdEngine::default_format_version())
}

pub fn decompressed_size_for<E: Engine>(
    src: &[u8],
    format_version: u32,
) -> Result<Option<u64>, EngineError> {
    E::decompressed_size(src, format_version)
}
