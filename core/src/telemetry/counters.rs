//! telemetry/counters.rs
//! Mutable counters updated by compress/decompress operations.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextCounters {
    pub compress_calls: u64,
    pub compress_failures: u64,
    pub decompress_calls: u64,
    pub decompress_failures: u64,
    /// Source bytes consumed by successful compress calls.
    pub bytes_plaintext_in: u64,
    /// Bytes written by successful compress calls.
    pub bytes_compressed_out: u64,
    /// Source bytes consumed by successful decompress calls.
    pub bytes_compressed_in: u64,
    /// Bytes written by successful decompress calls.
    pub bytes_plaintext_out: u64,
}

impl ContextCounters {
    pub fn record_compress(&mut self, src_len: usize, written: Option<usize>) {
        self.compress_calls += 1;
        match written {
            Some(n) => {
                self.bytes_plaintext_in += src_len as u64;
                self.bytes_compressed_out += n as u64;
            }
            None => self.compress_failures += 1,
        }
    }

    pub fn record_decompress(&mut self, src_len: usize, written: Option<usize>) {
        self.decompress_calls += 1;
        match written {
            Some(n) => {
                self.bytes_compressed_in += src_len as u64;
                self.bytes_plaintext_out += n as u64;
            }
            None => self.decompress_failures += 1,
        }
    }

    pub fn total_calls(&self) -> u64 {
        self.compress_calls + self.decompress_calls
    }

    pub fn total_failures(&self) -> u64 {
        self.compress_failures + self.decompress_failures
    }

    pub fn merge(&mut self, other: &ContextCounters) {
        self.compress_calls += other.compress_calls;
        self.compress_failures += other.compress_failures;
        self.decompress_calls += other.decompress_calls;
        self.decompress_failures += other.decompress_failures;

        self.bytes_plaintext_in += other.bytes_plaintext_in;
        self.bytes_compressed_out += other.bytes_compressed_out;
        self.bytes_compressed_in += other.bytes_compressed_in;
        self.bytes_plaintext_out += other.bytes_plaintext_out;
    }
}

impl AddAssign for ContextCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
