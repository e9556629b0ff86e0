//! Decoding of one participant triple into a typed record.
//!
//! Each roster entry is three consecutive raw lines: identifier, network address, encoded
//! public key. The three fields fail differently on purpose: a non-numeric identifier or
//! unusable key material aborts the whole session parse (a participant without a key cannot
//! join a secure computation), while an address that does not resolve is recorded against the
//! participant's roster index and decoding continues.

use std::net::IpAddr;
use std::str::FromStr;

use ed25519_dalek::{PUBLIC_KEY_LENGTH, VerifyingKey};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Error;
use crate::frame::FIELDS_PER_PARTICIPANT;
use crate::resolve::Resolver;

/// One fully decoded roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// The participant's identifier, unique within a roster.
    pub id: BigInt,
    /// The raw address field as written in the file (hostname or literal IP).
    pub host: String,
    /// The resolved address, or `None` if resolution failed for this participant.
    pub address: Option<IpAddr>,
    /// The participant's reconstructed public key.
    pub public_key: VerifyingKey,
}

/// A recorded, non-fatal address-resolution failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionFailure {
    /// Roster position of the affected participant.
    pub index: usize,
    /// The address field that did not resolve.
    pub host: String,
    /// Why resolution failed.
    pub reason: String,
}

/// Decodes the participant triple at roster position `index`.
///
/// Returns the record plus the recorded resolution failure, if any. `triple` must hold the
/// participant's three consecutive raw lines, as handed out by the framer.
pub fn decode_participant(
    index: usize,
    triple: &[String],
    resolver: &impl Resolver,
) -> Result<(ParticipantRecord, Option<ResolutionFailure>), Error> {
    let [id, host, encoded_key] = triple else {
        // The framer guarantees triples; anything else is a caller bug.
        return Err(Error::TruncatedRoster {
            expected: FIELDS_PER_PARTICIPANT,
            found: triple.len(),
        });
    };

    let id = BigInt::from_str(id).map_err(|_| Error::InvalidIdentifier {
        index,
        text: id.clone(),
    })?;

    let (address, failure) = match resolver.resolve(host) {
        Ok(addr) => (Some(addr), None),
        Err(e) => {
            warn!(index, host = %host, reason = %e.reason, "address resolution failed");
            (
                None,
                Some(ResolutionFailure {
                    index,
                    host: host.clone(),
                    reason: e.reason,
                }),
            )
        }
    };

    let public_key = reconstruct_key(index, encoded_key)?;

    Ok((
        ParticipantRecord {
            id,
            host: host.clone(),
            address,
            public_key,
        },
        failure,
    ))
}

/// Reconstructs a public key from its hex-encoded form.
///
/// The roster key algorithm is fixed to Ed25519 for the whole file: the field must decode to
/// exactly 32 bytes naming a canonical curve point.
fn reconstruct_key(index: usize, encoded: &str) -> Result<VerifyingKey, Error> {
    let bytes = hex::decode(encoded).map_err(|e| Error::InvalidKeyMaterial {
        index,
        reason: format!("key field is not valid hex: {e}"),
    })?;
    let bytes: [u8; PUBLIC_KEY_LENGTH] =
        bytes.try_into().map_err(|b: Vec<u8>| Error::InvalidKeyMaterial {
            index,
            reason: format!("key must be {PUBLIC_KEY_LENGTH} bytes, found {}", b.len()),
        })?;
    VerifyingKey::from_bytes(&bytes).map_err(|e| Error::InvalidKeyMaterial {
        index,
        reason: format!("key bytes do not name a valid point: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use ed25519_dalek::SigningKey;

    use super::*;
    use crate::resolve::ResolveError;

    /// Resolves literal IPs only, never touching the system resolver.
    struct LiteralResolver;

    impl Resolver for LiteralResolver {
        fn resolve(&self, host: &str) -> Result<IpAddr, ResolveError> {
            host.parse().map_err(|_| ResolveError {
                host: host.to_string(),
                reason: "not a literal address".to_string(),
            })
        }
    }

    fn valid_key_hex() -> String {
        let key = SigningKey::from_bytes(&[7; 32]).verifying_key();
        hex::encode(key.to_bytes())
    }

    fn triple(id: &str, host: &str, key: &str) -> Vec<String> {
        vec![id.to_string(), host.to_string(), key.to_string()]
    }

    #[test]
    fn decodes_a_well_formed_triple() -> Result<(), Error> {
        let (record, failure) =
            decode_participant(0, &triple("42", "10.1.2.3", &valid_key_hex()), &LiteralResolver)?;
        assert_eq!(record.id, BigInt::from(42));
        assert_eq!(record.host, "10.1.2.3");
        assert_eq!(record.address, Some(IpAddr::V4(Ipv4Addr::new(10, 1, 2, 3))));
        assert!(failure.is_none());
        Ok(())
    }

    #[test]
    fn resolution_failure_is_recorded_not_fatal() -> Result<(), Error> {
        let (record, failure) =
            decode_participant(3, &triple("1", "not a host###", &valid_key_hex()), &LiteralResolver)?;
        assert_eq!(record.address, None);
        let failure = failure.unwrap();
        assert_eq!(failure.index, 3);
        assert_eq!(failure.host, "not a host###");
        Ok(())
    }

    #[test]
    fn non_numeric_identifier_is_fatal() {
        let err = decode_participant(2, &triple("abc", "10.0.0.1", &valid_key_hex()), &LiteralResolver)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier { index: 2, .. }));
    }

    #[test]
    fn non_hex_key_is_fatal() {
        let err =
            decode_participant(0, &triple("1", "10.0.0.1", "zz-not-hex"), &LiteralResolver).unwrap_err();
        assert!(matches!(err, Error::InvalidKeyMaterial { index: 0, .. }));
    }

    #[test]
    fn short_key_is_fatal() {
        let err = decode_participant(1, &triple("1", "10.0.0.1", "0011"), &LiteralResolver).unwrap_err();
        assert!(matches!(err, Error::InvalidKeyMaterial { index: 1, .. }));
    }

    #[test]
    fn overlong_key_is_fatal() {
        let bad = hex::encode([0x11; PUBLIC_KEY_LENGTH + 1]);
        let err = decode_participant(0, &triple("1", "10.0.0.1", &bad), &LiteralResolver).unwrap_err();
        assert!(matches!(err, Error::InvalidKeyMaterial { index: 0, .. }));
    }

    #[test]
    fn negative_identifiers_parse() -> Result<(), Error> {
        let (record, _) =
            decode_participant(0, &triple("-17", "10.0.0.1", &valid_key_hex()), &LiteralResolver)?;
        assert_eq!(record.id, BigInt::from(-17));
        Ok(())
    }
}
