#[cfg(test)]
mod tests {
    use std::ffi::{c_void, CStr};
    use std::os::raw::c_char;
    use std::ptr;

    use proptest::prelude::*;
    use zbridge::*;

    fn compress(ctx: *mut ZbridgeContext, src: &[u8]) -> Vec<u8> {
        let mut dst = vec![0u8; zbridge_compress_bound(src.len())];
        let n = unsafe {
            zbridge_compress(
                ctx,
                dst.as_mut_ptr() as *mut c_void,
                dst.len(),
                src.as_ptr() as *const c_void,
                src.len(),
            )
        };
        assert!(n >= 0, "compress failed: {}", n);
        assert!(n as usize <= dst.len());
        dst.truncate(n as usize);
        dst
    }

    fn decompress(ctx: *mut ZbridgeContext, dst: &mut [u8], src: &[u8]) -> i64 {
        unsafe {
            zbridge_decompress(
                ctx,
                dst.as_mut_ptr() as *mut c_void,
                dst.len(),
                src.as_ptr() as *const c_void,
                src.len(),
            )
        }
    }

    fn message(result: i64) -> String {
        let mut buf = [0 as c_char; 128];
        unsafe { zbridge_error_name(result, buf.as_mut_ptr(), buf.len()) };
        unsafe { CStr::from_ptr(buf.as_ptr()) }.to_string_lossy().into_owned()
    }

    #[test]
    fn ten_a_round_trip() {
        let ctx = zbridge_context_create();
        assert!(!ctx.is_null());

        let src = b"AAAAAAAAAA";
        let packed = compress(ctx, src);
        assert!(packed.len() <= zbridge_compress_bound(10));

        let mut out = [0u8; 10];
        assert_eq!(decompress(ctx, &mut out, &packed), 10);
        assert_eq!(&out, src);

        unsafe { zbridge_context_free(ctx) };
    }

    #[test]
    fn zero_capacity_decompress_is_negative() {
        let ctx = zbridge_context_create();
        let packed = compress(ctx, b"AAAAAAAAAA");
        let r = unsafe {
            zbridge_decompress(ctx, ptr::null_mut(), 0, packed.as_ptr() as *const c_void, packed.len())
        };
        assert!(r < 0);
        assert_eq!(zbridge_is_error(r), 1);
        assert_ne!(message(r), "Invalid context or argument");
        unsafe { zbridge_context_free(ctx) };
    }

    #[test]
    fn empty_input_compresses() {
        assert!(zbridge_compress_bound(0) > 0);
        let ctx = zbridge_context_create();
        let mut dst = vec![0u8; zbridge_compress_bound(0)];
        let r = unsafe {
            zbridge_compress(ctx, dst.as_mut_ptr() as *mut c_void, dst.len(), ptr::null(), 0)
        };
        assert!(r >= 0);
        unsafe { zbridge_context_free(ctx) };
    }

    #[test]
    fn null_context_returns_minus_one() {
        let mut dst = [0u8; 64];
        let src = b"abc";
        let c = unsafe {
            zbridge_compress(ptr::null_mut(), dst.as_mut_ptr() as *mut c_void, 64, src.as_ptr() as *const c_void, 3)
        };
        let d = unsafe {
            zbridge_decompress(ptr::null_mut(), dst.as_mut_ptr() as *mut c_void, 64, src.as_ptr() as *const c_void, 3)
        };
        assert_eq!(c, -1);
        assert_eq!(d, -1);
        assert_eq!(dst, [0u8; 64]);
    }

    #[test]
    fn null_buffer_with_length_is_rejected() {
        let ctx = zbridge_context_create();
        let r = unsafe { zbridge_compress(ctx, ptr::null_mut(), 100, ptr::null(), 10) };
        assert_eq!(r, -1);
        assert_eq!(message(r), "Invalid context or argument");
        unsafe { zbridge_context_free(ctx) };
    }

    #[test]
    fn free_null_is_noop() {
        unsafe {
            zbridge_context_free(ptr::null_mut());
            zbridge_context_free(ptr::null_mut());
        }
    }

    #[test]
    fn context_reused_many_times() {
        let ctx = zbridge_context_create();
        for i in 0..100usize {
            let data = vec![(i % 251) as u8; i * 37];
            let packed = compress(ctx, &data);
            let mut out = vec![0u8; data.len()];
            assert_eq!(decompress(ctx, &mut out, &packed), data.len() as i64);
            assert_eq!(out, data);
        }
        unsafe { zbridge_context_free(ctx) };
    }

    #[test]
    fn decompressed_size_reads_header() {
        let ctx = zbridge_context_create();
        let data = b"sized frame ".repeat(9);
        let packed = compress(ctx, &data);
        let n = unsafe { zbridge_get_decompressed_size(packed.as_ptr() as *const c_void, packed.len()) };
        assert_eq!(n, data.len() as i64);

        let junk = b"nope nope nope";
        let bad = unsafe { zbridge_get_decompressed_size(junk.as_ptr() as *const c_void, junk.len()) };
        assert!(bad < 0);
        unsafe { zbridge_context_free(ctx) };
    }

    #[test]
    fn error_name_truncates_and_reports_length() {
        let full = unsafe { zbridge_error_name(-70, ptr::null_mut(), 0) };
        assert!(full > 4);

        let mut small = [0x7f as c_char; 5];
        let reported = unsafe { zbridge_error_name(-70, small.as_mut_ptr(), small.len()) };
        assert_eq!(reported, full);
        assert_eq!(small[4], 0);

        assert_eq!(message(0), "No error detected");
        assert_eq!(zbridge_is_error(0), 0);
    }

    #[test]
    fn version_matches_package() {
        let v = unsafe { CStr::from_ptr(zbridge_version()) };
        assert_eq!(v.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn enable_logging_is_repeatable() {
        zbridge_enable_logging();
        zbridge_enable_logging();
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_sign_convention(data in proptest::collection::vec(any::<u8>(), 0..2048), cap in 0usize..4096) {
            let ctx = zbridge_context_create();
            let mut dst = vec![0u8; cap];
            let r = unsafe {
                zbridge_compress(ctx, dst.as_mut_ptr() as *mut c_void, cap, data.as_ptr() as *const c_void, data.len())
            };
            if r >= 0 {
                prop_assert!(r as usize <= cap);
                let mut out = vec![0u8; data.len()];
                prop_assert_eq!(decompress(ctx, &mut out, &dst[..r as usize]), data.len() as i64);
                prop_assert_eq!(out, data);
            }
            unsafe { zbridge_context_free(ctx) };
        }
    }
}
