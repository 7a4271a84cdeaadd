#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use zbridge_core::{compress_bound, result::to_signed, Context};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        // decompress(compress(s)) == s with buffers sized by compress_bound
        #[test]
        fn prop_round_trip(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
            let mut ctx = Context::new().unwrap();
            let mut packed = vec![0u8; compress_bound(data.len())];
            let n = ctx.compress(&mut packed, &data).unwrap();

            let mut restored = vec![0u8; data.len()];
            let m = ctx.decompress(&mut restored, &packed[..n]).unwrap();
            prop_assert_eq!(m, data.len());
            prop_assert_eq!(restored, data);
        }

        // Repetitive input exercises the match finder rather than raw blocks.
        #[test]
        fn prop_round_trip_repetitive(unit in proptest::collection::vec(any::<u8>(), 1..16), reps in 1usize..2000) {
            let data = unit.repeat(reps);
            let mut ctx = Context::new().unwrap();
            let packed = ctx.compress_to_vec(&data).unwrap();
            prop_assert_eq!(ctx.decompress_to_vec(&packed).unwrap(), data);
        }

        // A destination of exactly compress_bound bytes never fails for capacity.
        #[test]
        fn prop_bound_is_sufficient(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
            let mut ctx = Context::new().unwrap();
            let bound = compress_bound(data.len());
            let mut packed = vec![0u8; bound];
            let raw = to_signed(ctx.compress(&mut packed, &data));
            prop_assert!(raw >= 0);
            prop_assert!(raw as usize <= bound);
        }

        // Non-negative results never exceed the capacity supplied.
        #[test]
        fn prop_result_within_capacity(
            data in proptest::collection::vec(any::<u8>(), 1..512),
            cap in 0usize..600,
        ) {
            let mut ctx = Context::new().unwrap();
            let mut dst = vec![0u8; cap];
            let raw = to_signed(ctx.compress(&mut dst, &data));
            if raw >= 0 {
                prop_assert!(raw as usize <= cap);
            }
        }

        // Random bytes fed to the decoder fail cleanly or stay within capacity.
        #[test]
        fn prop_garbage_never_overruns(junk in proptest::collection::vec(any::<u8>(), 0..256)) {
            let mut ctx = Context::new().unwrap();
            let mut dst = vec![0u8; 1024];
            let raw = to_signed(ctx.decompress(&mut dst, &junk));
            prop_assert!(raw < 0 || raw as usize <= dst.len());
        }
    }
}
