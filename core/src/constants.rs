/// Result returned across the C boundary when the context is null, released,
/// or missing the handle an operation needs. The engine is not invoked.
pub const INVALID_CONTEXT: i64 = -1;

/// Sticky parameters are enabled on both handles unless configured otherwise.
pub const DEFAULT_STICKY_PARAMETERS: bool = true;

/// Upper bound on a frame-declared size that `decompress_to_vec` will allocate (1 GiB).
pub const MAX_DECOMPRESSED_ALLOC: usize = 1 << 30;
