//! A Rust interpreter for the plaintext initialization files that secure multi-party computation
//! (MPC) groups exchange before a joint computation starts.
//!
//! A group initialization file describes one MPC session: the function to be jointly computed,
//! the data type of its inputs, an initialization key, a roster of participants (identifier,
//! network address and encoded public key per participant) and a trailing integrity digest.
//! This crate decodes such a file into validated, strongly-typed records and independently
//! recomputes the digest, returning a pass/fail integrity verdict alongside the decoded data.
//!
//! ## Main Components
//!
//! The crate is structured into several modules:
//!
//! * [`session`]: The [`session::parse_session`] entry point and the [`session::SessionRecord`]
//!   aggregate that it produces.
//! * [`frame`]: Computes the fixed-width sub-ranges of the line layout before any field is read.
//! * [`participant`]: Decodes one participant triple into typed values, including public-key
//!   reconstruction.
//! * [`integrity`]: Recomputes the file digest and compares it to the embedded one in constant
//!   time.
//! * [`resolve`]: The address-resolution seam, pluggable for tests.
//! * [`lines`]: Reads a file into an ordered sequence of lines.
//! * [`identity`]: Interprets the 7-line per-participant identity file.
//! * [`secret`]: Converts a participant's secret-input file into a typed list of values.
//!
//! ## File Layout
//!
//! One logical value per line, newline-delimited. With `N` participants:
//!
//! ```text
//! line 0             function descriptor (free text)
//! line 1             data-type tag (free text, e.g. "int" or "BigInteger")
//! line 2             initialization key (decimal integer, may be large)
//! line 3             roster size N (non-negative decimal integer)
//! lines 4 .. 4+3N    N triples: identifier, address, hex-encoded public key
//! line 4+3N          digest algorithm name
//! line 4+3N+1        embedded digest (hex text)
//! ```
//!
//! ## Basic Usage
//!
//! ```no_run
//! use convoke::parse_session;
//!
//! # fn example() -> Result<(), convoke::Error> {
//! let session = parse_session("group_init.txt")?;
//!
//! // The integrity verdict is data, not an error: a session whose digest does
//! // not match is still returned and the caller decides whether to trust it.
//! if !session.integrity.verdict {
//!     eprintln!("digest mismatch, refusing to join session");
//! }
//!
//! for participant in &session.roster {
//!     println!("{} @ {:?}", participant.id, participant.address);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Behavior
//!
//! Structural problems (missing header lines, a truncated roster, a non-numeric identifier,
//! key material that does not reconstruct, duplicate identifiers) abort the parse with a typed
//! [`Error`] carrying the file position. Two failure kinds are deliberately non-fatal and are
//! returned as data inside the [`session::SessionRecord`]: an address that does not resolve
//! (recorded per participant) and a digest mismatch (recorded as the integrity verdict).
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use crate::error::Error;
pub use crate::session::{SessionRecord, parse_session};

pub mod error;
pub mod frame;
pub mod identity;
pub mod integrity;
pub mod lines;
pub mod participant;
pub mod resolve;
pub mod secret;
pub mod session;
