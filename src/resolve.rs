//! The address-resolution seam used when decoding participant records.
//!
//! Resolution is deliberately pluggable: the system implementation consults the operating
//! system resolver, while tests inject deterministic implementations so that no test depends
//! on DNS being reachable.

use std::net::{IpAddr, ToSocketAddrs};

use thiserror::Error;

/// The error raised when a participant's address field cannot be resolved.
///
/// Within a session parse this is a *non-fatal* failure: it is recorded against the
/// participant's roster index and the remaining roster continues decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not resolve {host:?}: {reason}")]
pub struct ResolveError {
    /// The raw address field from the file.
    pub host: String,
    /// Why resolution failed.
    pub reason: String,
}

/// Resolves a hostname or literal IP address to a usable network address.
pub trait Resolver {
    /// Resolves `host` to an IP address, or explains why it could not.
    fn resolve(&self, host: &str) -> Result<IpAddr, ResolveError>;
}

/// A [`Resolver`] backed by the operating system.
///
/// Literal IPv4/IPv6 addresses are accepted without any lookup; anything else goes through
/// the system resolver and the first returned address wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl Resolver for SystemResolver {
    fn resolve(&self, host: &str) -> Result<IpAddr, ResolveError> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(ip);
        }
        let mut addrs = (host, 0u16).to_socket_addrs().map_err(|e| ResolveError {
            host: host.to_string(),
            reason: e.to_string(),
        })?;
        match addrs.next() {
            Some(addr) => Ok(addr.ip()),
            None => Err(ResolveError {
                host: host.to_string(),
                reason: "resolver returned no addresses".to_string(),
            }),
        }
    }
}
