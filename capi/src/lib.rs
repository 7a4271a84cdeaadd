//! zbridge-capi
//!
//! C ABI over `zbridge-core`.
//!
//! Memory rules:
//! - A context from `zbridge_context_create()` is owned by the caller and must be
//!   passed to `zbridge_context_free()` exactly once. Freeing NULL is a no-op.
//! - Buffers are always caller-owned; nothing returned here needs freeing.
//!
//! Result convention for `zbridge_compress` / `zbridge_decompress`:
//! - `>= 0` → bytes written, never more than the capacity supplied.
//! - `< 0`  → failure; the magnitude is the engine's error code, or `-1` for a
//!   null context, a null buffer with a non-zero length, or a caught panic.
//!
//! # Safety
//! Pointers must be valid for the lengths passed alongside them. A context
//! must not be used from two threads at the same time, and must not be used
//! after it was freed.

use std::ffi::c_void;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::slice;
use std::sync::Once;

use libc::{c_char, c_int, size_t};
use log::LevelFilter;

use zbridge_core::constants::INVALID_CONTEXT;
use zbridge_core::result::{error_code, to_signed};
use zbridge_core::{bounds, Context, Engine, EngineError, ZstdEngine};

/// Opaque context handle handed to C.
pub struct ZbridgeContext {
    inner: Context<ZstdEngine>,
}

/// Run `f`, mapping a panic to `fallback` so unwinding never crosses into C.
fn guard<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        log::error!("zbridge: panic caught at C boundary");
        fallback
    })
}

/// Borrow `len` bytes at `ptr`; `None` when a non-empty range has no pointer.
unsafe fn src_slice<'a>(ptr: *const c_void, len: size_t) -> Option<&'a [u8]> {
    if len == 0 {
        return Some(&[]);
    }
    if ptr.is_null() || len > isize::MAX as usize {
        return None;
    }
    Some(slice::from_raw_parts(ptr as *const u8, len))
}

unsafe fn dst_slice<'a>(ptr: *mut c_void, len: size_t) -> Option<&'a mut [u8]> {
    if len == 0 {
        return Some(&mut []);
    }
    if ptr.is_null() || len > isize::MAX as usize {
        return None;
    }
    Some(slice::from_raw_parts_mut(ptr as *mut u8, len))
}

// ============================================================================
// Context lifecycle
// ============================================================================

/// Create a context with sticky parameters, the engine's default format
/// version and default compression level.
///
/// Returns NULL if allocation or configuration fails; nothing is leaked.
#[no_mangle]
pub extern "C" fn zbridge_context_create() -> *mut ZbridgeContext {
    guard(ptr::null_mut(), || match Context::new() {
        Ok(inner) => Box::into_raw(Box::new(ZbridgeContext { inner })),
        Err(e) => {
            log::debug!("zbridge: context creation failed: {}", e);
            ptr::null_mut()
        }
    })
}

/// Release a context. NULL is accepted and ignored.
///
/// # Safety
/// `ctx` must be NULL or a live handle from `zbridge_context_create()` that has
/// not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn zbridge_context_free(ctx: *mut ZbridgeContext) {
    if ctx.is_null() {
        return;
    }
    guard((), || drop(Box::from_raw(ctx)));
}

// ============================================================================
// Operations
// ============================================================================

/// Compress `src_size` bytes from `src` into `dst`.
///
/// # Safety
/// `ctx` must be NULL or live; `dst`/`src` must be valid for their lengths.
#[no_mangle]
pub unsafe extern "C" fn zbridge_compress(
    ctx: *mut ZbridgeContext,
    dst: *mut c_void,
    dst_capacity: size_t,
    src: *const c_void,
    src_size: size_t,
) -> i64 {
    let Some(ctx) = ctx.as_mut() else {
        return INVALID_CONTEXT;
    };
    let (Some(dst), Some(src)) = (dst_slice(dst, dst_capacity), src_slice(src, src_size)) else {
        log::warn!("zbridge_compress: null buffer with non-zero length");
        return INVALID_CONTEXT;
    };
    guard(INVALID_CONTEXT, || to_signed(ctx.inner.compress(dst, src)))
}

/// Decompress `src_size` bytes from `src` into `dst`.
///
/// `dst_capacity` must cover the whole decompressed payload; see
/// `zbridge_get_decompressed_size()`.
///
/// # Safety
/// `ctx` must be NULL or live; `dst`/`src` must be valid for their lengths.
#[no_mangle]
pub unsafe extern "C" fn zbridge_decompress(
    ctx: *mut ZbridgeContext,
    dst: *mut c_void,
    dst_capacity: size_t,
    src: *const c_void,
    src_size: size_t,
) -> i64 {
    let Some(ctx) = ctx.as_mut() else {
        return INVALID_CONTEXT;
    };
    let (Some(dst), Some(src)) = (dst_slice(dst, dst_capacity), src_slice(src, src_size)) else {
        log::warn!("zbridge_decompress: null buffer with non-zero length");
        return INVALID_CONTEXT;
    };
    guard(INVALID_CONTEXT, || to_signed(ctx.inner.decompress(dst, src)))
}

// ============================================================================
// Sizing
// ============================================================================

/// Worst-case compressed size for `src_size` input bytes.
#[no_mangle]
pub extern "C" fn zbridge_compress_bound(src_size: size_t) -> size_t {
    bounds::compress_bound(src_size)
}

/// Decompressed size recorded in the frame header at `src`.
///
/// Returns `-1` when the frame does not record it (or on a null buffer), and the
/// negated engine code when `src` is not a valid frame header.
///
/// # Safety
/// `src` must be valid for `src_size` bytes.
#[no_mangle]
pub unsafe extern "C" fn zbridge_get_decompressed_size(
    src: *const c_void,
    src_size: size_t,
) -> i64 {
    let Some(src) = src_slice(src, src_size) else {
        return INVALID_CONTEXT;
    };
    guard(INVALID_CONTEXT, || match bounds::decompressed_size(src) {
        Ok(Some(n)) => i64::try_from(n).unwrap_or(i64::MAX),
        Ok(None) => INVALID_CONTEXT,
        Err(e) => -i64::from(e.code()),
    })
}

// ============================================================================
// Errors
// ============================================================================

/// Non-zero when `result` signals failure.
#[no_mangle]
pub extern "C" fn zbridge_is_error(result: i64) -> c_int {
    c_int::from(result < 0)
}

fn error_message(result: i64) -> &'static str {
    match error_code(result) {
        None => "No error detected",
        Some(_) if result == INVALID_CONTEXT => "Invalid context or argument",
        Some(code) => ZstdEngine::error_name(EngineError::new(code)),
    }
}

/// Write a NUL-terminated message for `result` into `buf`, truncating to fit.
///
/// Returns the full message length excluding the NUL, so callers can detect
/// truncation. With a NULL `buf` or zero `capacity` nothing is written.
///
/// # Safety
/// `buf` must be NULL or valid for `capacity` bytes.
#[no_mangle]
pub unsafe extern "C" fn zbridge_error_name(
    result: i64,
    buf: *mut c_char,
    capacity: size_t,
) -> size_t {
    let msg = error_message(result).as_bytes();
    if buf.is_null() || capacity == 0 {
        return msg.len();
    }
    let n = msg.len().min(capacity - 1);
    ptr::copy_nonoverlapping(msg.as_ptr(), buf as *mut u8, n);
    *buf.add(n) = 0;
    msg.len()
}

// ============================================================================
// Misc
// ============================================================================

static INIT_LOGGER: Once = Once::new();

/// Route the library's log records to stderr. `RUST_LOG` overrides the
/// default `info` level. Later calls do nothing.
#[no_mangle]
pub extern "C" fn zbridge_enable_logging() {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(LevelFilter::Info);
        builder.parse_default_env();
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });
        let _ = builder.try_init();
    });
}

/// Library version as a static NUL-terminated string.
#[no_mangle]
pub extern "C" fn zbridge_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
