//! The session aggregate and the single public parsing entry point.
//!
//! Parsing is one pure pipeline run once, synchronously, at construction time: frame the
//! lines, decode each participant triple in file order, enforce identifier uniqueness,
//! verify the digest, assemble. Intermediate values are threaded explicitly; nothing is
//! populated by side effect and the resulting record is never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Error;
use crate::frame::{self, FIELDS_PER_PARTICIPANT, Frame, SessionHeader};
use crate::integrity::{self, IntegrityBlock};
use crate::lines::read_all_lines;
use crate::participant::{self, ParticipantRecord, ResolutionFailure};
use crate::resolve::{Resolver, SystemResolver};

/// The fully decoded, validated in-memory representation of one initialization file.
///
/// Constructed in one shot and owned exclusively by the caller; there is no shared mutable
/// state and no teardown beyond normal scope exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The four positional header fields.
    pub header: SessionHeader,
    /// The decoded roster, in file order. Its length always equals `header.roster_size`.
    pub roster: Vec<ParticipantRecord>,
    /// The digest recomputation outcome. A failed verdict does not fail the parse.
    pub integrity: IntegrityBlock,
    /// Address-resolution failures accumulated during decoding, one per affected
    /// participant, never hidden.
    pub resolution_failures: Vec<ResolutionFailure>,
}

/// Parses the session initialization file at `path`.
///
/// Reads the file through [`read_all_lines`] and runs the construction pipeline with the
/// [`SystemResolver`]. This is the only operation in the crate that touches the filesystem
/// for session files; the file handle is released before this returns, on all paths.
pub fn parse_session(path: impl AsRef<Path>) -> Result<SessionRecord, Error> {
    let path = path.as_ref();
    let lines = read_all_lines(path)?;
    debug!(path = %path.display(), lines = lines.len(), "read session initialization file");
    SessionRecord::from_lines(&lines, &SystemResolver)
}

impl SessionRecord {
    /// Runs the construction pipeline over an already-read line sequence.
    ///
    /// Pure apart from resolver lookups and tracing events, which makes it the natural seam
    /// for tests: inject a deterministic [`Resolver`] and feed lines directly. Short-circuits
    /// on the first fatal error; accumulates non-fatal resolution failures.
    pub fn from_lines(lines: &[String], resolver: &impl Resolver) -> Result<Self, Error> {
        let Frame {
            header,
            roster_lines,
            metadata_lines,
            hashed_span,
        } = frame::frame(lines)?;
        debug!(
            function = %header.function,
            data_type = %header.data_type,
            roster_size = header.roster_size,
            "framed session header"
        );

        let mut roster = Vec::with_capacity(header.roster_size);
        let mut resolution_failures = Vec::new();
        let mut seen = HashSet::with_capacity(header.roster_size);
        for (index, triple) in roster_lines.chunks(FIELDS_PER_PARTICIPANT).enumerate() {
            let (record, failure) = participant::decode_participant(index, triple, resolver)?;
            if !seen.insert(record.id.clone()) {
                return Err(Error::DuplicateIdentifier {
                    index,
                    id: record.id,
                });
            }
            resolution_failures.extend(failure);
            roster.push(record);
        }

        let integrity = integrity::verify(hashed_span, &metadata_lines[0], &metadata_lines[1]);
        if !integrity.verdict {
            warn!(
                embedded = %hex::encode(&integrity.embedded),
                computed = %hex::encode(&integrity.computed),
                "embedded digest does not match recomputed digest"
            );
        }

        Ok(SessionRecord {
            header,
            roster,
            integrity,
            resolution_failures,
        })
    }

    /// Re-emits the line layout of this session.
    ///
    /// Participants are written back from their raw `host` field, so a record whose address
    /// never resolved still serializes faithfully. The digest line is freshly recomputed over
    /// the emitted header + roster span (under the stored algorithm name), so the output
    /// always re-verifies to true when parsed again.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines =
            Vec::with_capacity(frame::LIST_START + FIELDS_PER_PARTICIPANT * self.roster.len() + 2);
        lines.push(self.header.function.clone());
        lines.push(self.header.data_type.clone());
        lines.push(self.header.init_key.to_string());
        lines.push(self.header.roster_size.to_string());
        for participant in &self.roster {
            lines.push(participant.id.to_string());
            lines.push(participant.host.clone());
            lines.push(hex::encode(participant.public_key.as_bytes()));
        }
        let digest = integrity::digest_span(&lines);
        lines.push(self.integrity.algorithm.clone());
        lines.push(hex::encode(digest));
        lines
    }
}
