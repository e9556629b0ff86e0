//! The error taxonomy shared by all file interpreters in this crate.
//!
//! Every variant here is *fatal*: it aborts the parse that raised it and surfaces to the
//! caller with enough position context to diagnose the file. The two non-fatal failure kinds
//! (an address that does not resolve, a digest that does not match) are not errors at all;
//! they are returned as data inside [`crate::session::SessionRecord`].

use num_bigint::BigInt;
use thiserror::Error;

/// A fatal parse error, carrying the file position where interpretation stopped.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be read at all.
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
    /// The four header lines are missing or one of the numeric header fields does not parse.
    #[error("malformed header at line {line}: {reason}")]
    MalformedHeader {
        /// Index of the offending line.
        line: usize,
        /// What was expected at that line.
        reason: String,
    },
    /// The file has fewer lines than the declared roster size demands.
    #[error("truncated roster: expected at least {expected} lines, found {found}")]
    TruncatedRoster {
        /// Minimum line count implied by the roster size (including the two metadata lines).
        expected: usize,
        /// Number of lines actually present.
        found: usize,
    },
    /// A participant identifier field is not a decimal integer.
    #[error("participant identifier {text:?} at index {index} is not a decimal integer")]
    InvalidIdentifier {
        /// Index of the record within its file (roster position, or 0 for an identity file).
        index: usize,
        /// The raw field text.
        text: String,
    },
    /// A participant's encoded public key could not be reconstructed.
    #[error("invalid public key material for participant at roster index {index}: {reason}")]
    InvalidKeyMaterial {
        /// Roster position of the participant.
        index: usize,
        /// Why reconstruction failed (bad encoding, wrong length, rejected point).
        reason: String,
    },
    /// Two roster entries carry the same identifier.
    #[error("duplicate participant identifier {id} at roster index {index}")]
    DuplicateIdentifier {
        /// Roster position of the *second* occurrence.
        index: usize,
        /// The repeated identifier.
        id: BigInt,
    },
    /// An identity file has fewer than its required number of lines.
    #[error("truncated identity file: expected {expected} lines, found {found}")]
    TruncatedIdentity {
        /// Required line count.
        expected: usize,
        /// Number of lines actually present.
        found: usize,
    },
    /// A secret-input file was requested under a data-type tag this crate does not know.
    #[error("unsupported data type tag {tag:?}")]
    UnsupportedDataType {
        /// The unknown tag.
        tag: String,
    },
    /// A secret-input line does not parse under the declared data-type tag.
    #[error("value {text:?} at line {line} does not parse as {tag}")]
    InvalidSecretValue {
        /// The data-type tag the file was read under.
        tag: String,
        /// Index of the offending line.
        line: usize,
        /// The raw line text.
        text: String,
    },
}
