//! context/ops.rs
//! Compress and decompress against a live [`Context`].
//!
//! Each call makes a single synchronous engine attempt. With sticky parameters
//! off, the handle is reset after the call so the next one starts from engine
//! defaults.

use crate::constants::MAX_DECOMPRESSED_ALLOC;
use crate::context::manager::Context;
use crate::engine::Engine;
use crate::result::{OpError, OpResult};

impl<E: Engine> Context<E> {
    /// Compress `src` into `dst`.
    ///
    /// On success returns the compressed size, always `<= dst.len()`. On failure
    /// the contents of `dst` are unspecified.
    pub fn compress(&mut self, dst: &mut [u8], src: &[u8]) -> OpResult {
        let Some(encoder) = self.encoder.as_mut() else {
            return Err(OpError::InvalidContext);
        };

        let result = E::compress(encoder, dst, src);
        debug_assert!(result.map_or(true, |n| n <= dst.len()));

        if !self.config.sticky_parameters {
            if let Err(e) = E::reset_encoder(encoder) {
                log::warn!("{}: encoder reset failed: {}", E::name(), E::error_name(e));
            }
        }

        self.counters.record_compress(src.len(), result.ok());
        if let Err(e) = result {
            log::debug!("{}: compress failed: {}", E::name(), E::error_name(e));
        }
        result.map_err(OpError::Engine)
    }

    /// Decompress `src` into `dst`.
    ///
    /// `dst` must be large enough for the whole decompressed payload; a short
    /// buffer is reported by the engine, never grown or retried here.
    pub fn decompress(&mut self, dst: &mut [u8], src: &[u8]) -> OpResult {
        let Some(decoder) = self.decoder.as_mut() else {
            return Err(OpError::InvalidContext);
        };

        let result = E::decompress(decoder, dst, src);
        debug_assert!(result.map_or(true, |n| n <= dst.len()));

        if !self.config.sticky_parameters {
            match E::reset_decoder(decoder) {
                Ok(_) => self.decoder_format = E::default_format_version(),
                Err(e) => log::warn!("{}: decoder reset failed: {}", E::name(), E::error_name(e)),
            }
        }

        self.counters.record_decompress(src.len(), result.ok());
        if let Err(e) = result {
            log::debug!("{}: decompress failed: {}", E::name(), E::error_name(e));
        }
        result.map_err(OpError::Engine)
    }

    /// Compress into a fresh buffer sized by the engine's bound.
    ///
    /// Empty input yields empty output without calling the engine.
    pub fn compress_to_vec(&mut self, src: &[u8]) -> Result<Vec<u8>, OpError> {
        if !self.is_initialized() {
            return Err(OpError::InvalidContext);
        }
        if src.is_empty() {
            return Ok(Vec::new());
        }

        let mut out = vec![0u8; E::compress_bound(src.len())];
        let written = self.compress(&mut out, src)?;
        out.truncate(written);
        Ok(out)
    }

    /// Decompress a single frame whose header records its decompressed size.
    ///
    /// The header is read in the format the decoder currently expects.
    ///
    /// # Errors
    /// - `OpError::UnknownContentSize` if the frame does not record it.
    /// - `OpError::ContentTooLarge` above `MAX_DECOMPRESSED_ALLOC`.
    pub fn decompress_to_vec(&mut self, src: &[u8]) -> Result<Vec<u8>, OpError> {
        if !self.is_initialized() {
            return Err(OpError::InvalidContext);
        }
        if src.is_empty() {
            return Ok(Vec::new());
        }

        let size = E::decompressed_size(src, self.decoder_format)?
            .ok_or(OpError::UnknownContentSize)?;
        let len = usize::try_from(size)
            .ok()
            .filter(|&n| n <= MAX_DECOMPRESSED_ALLOC)
            .ok_or(OpError::ContentTooLarge { have: size, max: MAX_DECOMPRESSED_ALLOC })?;

        let mut out = vec![0u8; len];
        let written = self.decompress(&mut out, src)?;
        out.truncate(written);
        Ok(out)
    }
}
