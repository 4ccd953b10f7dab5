//! Checksum calculation for light-curve deduplication.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 fingerprint of a light curve's raw samples.
///
/// The hash covers the IEEE-754 little-endian bytes of both columns plus
/// the sample count, so the same upload always maps to the same checksum
/// and reordered or truncated data does not.
pub fn light_curve_checksum(time: &[f64], flux: &[f64]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((time.len() as u64).to_le_bytes());
    for value in time {
        hasher.update(value.to_le_bytes());
    }
    for value in flux {
        hasher.update(value.to_le_bytes());
    }
    hex::encode(hasher.finalize())
}
