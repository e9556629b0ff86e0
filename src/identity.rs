//! Interpretation of the per-participant identity file.
//!
//! A 7-line positional format naming one participant: identifier, the key files the
//! participant's key pairs live in (with their algorithms), and the digest metadata the file
//! carries for itself. All fields except the identifier are free text and stored verbatim;
//! the embedded digest is stored, not verified.

use std::path::Path;
use std::str::FromStr;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::lines::read_all_lines;

/// Number of lines an identity file must contain. Extra lines are ignored.
pub const IDENTITY_LINES: usize = 7;

/// One participant's decoded identity file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityFile {
    /// The participant's identifier.
    pub id: BigInt,
    /// Name of the file holding the participant's public key.
    pub public_key_file: String,
    /// Algorithm the public key was generated under.
    pub public_key_algorithm: String,
    /// Name of the file holding the participant's private key.
    pub private_key_file: String,
    /// Algorithm the private key was generated under.
    pub private_key_algorithm: String,
    /// Algorithm name declared for the file's own digest.
    pub hash_algorithm: String,
    /// The digest embedded in the file, stored as written.
    pub embedded_digest: String,
}

impl IdentityFile {
    /// Reads and interprets the identity file at `path`.
    pub fn parse(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_lines(&read_all_lines(path)?)
    }

    /// Interprets an already-read line sequence as an identity file.
    pub fn from_lines(lines: &[String]) -> Result<Self, Error> {
        if lines.len() < IDENTITY_LINES {
            return Err(Error::TruncatedIdentity {
                expected: IDENTITY_LINES,
                found: lines.len(),
            });
        }
        let id = BigInt::from_str(&lines[0]).map_err(|_| Error::InvalidIdentifier {
            index: 0,
            text: lines[0].clone(),
        })?;
        Ok(IdentityFile {
            id,
            public_key_file: lines[1].clone(),
            public_key_algorithm: lines[2].clone(),
            private_key_file: lines[3].clone(),
            private_key_algorithm: lines[4].clone(),
            hash_algorithm: lines[5].clone(),
            embedded_digest: lines[6].clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_lines(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_a_well_formed_identity_file() -> Result<(), Error> {
        let identity = IdentityFile::from_lines(&to_lines(&[
            "1001",
            "alice_pub.key",
            "Ed25519",
            "alice_pvt.key",
            "Ed25519",
            "SHA-256",
            "deadbeef",
        ]))?;
        assert_eq!(identity.id, BigInt::from(1001));
        assert_eq!(identity.public_key_file, "alice_pub.key");
        assert_eq!(identity.private_key_algorithm, "Ed25519");
        assert_eq!(identity.hash_algorithm, "SHA-256");
        assert_eq!(identity.embedded_digest, "deadbeef");
        Ok(())
    }

    #[test]
    fn six_lines_is_truncated() {
        let err = IdentityFile::from_lines(&to_lines(&["1", "a", "b", "c", "d", "e"])).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedIdentity {
                expected: IDENTITY_LINES,
                found: 6
            }
        ));
    }

    #[test]
    fn non_numeric_identifier_is_fatal() {
        let err = IdentityFile::from_lines(&to_lines(&["alice", "a", "b", "c", "d", "e", "f"]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier { index: 0, .. }));
    }
}
