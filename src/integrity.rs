//! Recomputation and verification of the file integrity digest.
//!
//! The digest covers the header and roster lines only (the two metadata lines are excluded),
//! fed into one running SHA-256 context line by line, without separators. The file's
//! algorithm-name line is stored for reporting but never selects the digest function: every
//! observed revision of the format verifies with SHA-256 regardless of what the file declares,
//! and this implementation preserves that behavior.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::debug;

/// The outcome of checking the embedded digest against the recomputed one.
///
/// A mismatch is data, not an error: callers must check [`IntegrityBlock::verdict`]
/// explicitly and decide their own trust policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityBlock {
    /// The algorithm name as declared by the file (stored, not used for selection).
    pub algorithm: String,
    /// The digest embedded in the file, hex-decoded. If the digest line is not valid hex its
    /// raw bytes are kept instead, which can never equal a SHA-256 output.
    pub embedded: Vec<u8>,
    /// The digest recomputed over the header + roster span.
    pub computed: Vec<u8>,
    /// Whether `embedded` and `computed` are byte-for-byte equal.
    pub verdict: bool,
}

/// Computes the SHA-256 digest over a span of lines, one update per line, no separators.
pub fn digest_span(lines: &[String]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for line in lines {
        hasher.update(line.as_bytes());
    }
    hasher.finalize().into()
}

/// Verifies the embedded digest against the digest recomputed over `hashed_span`.
///
/// The comparison is constant-time over the byte sequences. `algorithm` is carried through
/// from the file unchanged.
pub fn verify(hashed_span: &[String], algorithm: &str, embedded_text: &str) -> IntegrityBlock {
    let computed = digest_span(hashed_span).to_vec();
    let embedded =
        hex::decode(embedded_text).unwrap_or_else(|_| embedded_text.as_bytes().to_vec());
    let verdict: bool = embedded.ct_eq(&computed).into();
    debug!(algorithm, verdict, "verified session file digest");
    IntegrityBlock {
        algorithm: algorithm.to_string(),
        embedded,
        computed,
        verdict,
    }
}
