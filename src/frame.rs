//! Framing of the raw line sequence into named sub-ranges.
//!
//! Framing runs before any participant field is touched: it parses the four positional header
//! lines, checks that the file is long enough for the declared roster, and hands out the
//! roster, metadata and digest-input sub-slices so that no later stage ever indexes into the
//! flat line array on its own.

use std::str::FromStr;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Index of the first roster line.
pub const LIST_START: usize = 4;
/// Number of consecutive lines describing one participant.
pub const FIELDS_PER_PARTICIPANT: usize = 3;
/// Number of trailing metadata lines (digest algorithm name, embedded digest).
pub const METADATA_LINES: usize = 2;

/// The four positional header fields of a session initialization file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHeader {
    /// Free-text descriptor of the function the group will jointly compute.
    pub function: String,
    /// Free-text tag naming the data type of the function's inputs (e.g. `"int"`).
    pub data_type: String,
    /// The group initialization key, an arbitrary-precision decimal integer.
    pub init_key: BigInt,
    /// Number of participants the roster declares.
    pub roster_size: usize,
}

/// The named sub-ranges of a framed session file.
///
/// Borrowed from the raw line sequence; the layout invariants (`roster_lines.len() ==
/// 3 * header.roster_size`, `metadata_lines.len() == 2`) hold by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    /// The decoded header fields.
    pub header: SessionHeader,
    /// The roster span, grouped in consecutive triples (identifier, address, encoded key).
    pub roster_lines: &'a [String],
    /// The two trailing metadata lines: digest algorithm name, then embedded digest.
    pub metadata_lines: &'a [String],
    /// The span the integrity digest is computed over: header plus roster, metadata excluded.
    pub hashed_span: &'a [String],
}

/// Frames the raw lines of a session initialization file.
///
/// Pure function of its input. Fails with [`Error::MalformedHeader`] if fewer than four lines
/// exist or a numeric header field does not parse, and with [`Error::TruncatedRoster`] if the
/// file is shorter than the declared roster (plus metadata) demands. Lines beyond the two
/// metadata lines are ignored; every field is addressed positionally, so trailing extras can
/// never shift a field.
pub fn frame(lines: &[String]) -> Result<Frame<'_>, Error> {
    if lines.len() < LIST_START {
        return Err(Error::MalformedHeader {
            line: lines.len(),
            reason: format!("header needs {LIST_START} lines, file has {}", lines.len()),
        });
    }
    let init_key = BigInt::from_str(&lines[2]).map_err(|_| Error::MalformedHeader {
        line: 2,
        reason: format!("initialization key {:?} is not a decimal integer", lines[2]),
    })?;
    let roster_size = lines[3].parse::<usize>().map_err(|_| Error::MalformedHeader {
        line: 3,
        reason: format!("roster size {:?} is not a non-negative integer", lines[3]),
    })?;
    let header = SessionHeader {
        function: lines[0].clone(),
        data_type: lines[1].clone(),
        init_key,
        roster_size,
    };

    // Saturating: an absurd roster size can only ever read as truncation, never overflow.
    let expected = FIELDS_PER_PARTICIPANT
        .saturating_mul(roster_size)
        .saturating_add(LIST_START + METADATA_LINES);
    if lines.len() < expected {
        return Err(Error::TruncatedRoster {
            expected,
            found: lines.len(),
        });
    }
    let roster_end = expected - METADATA_LINES;

    Ok(Frame {
        header,
        roster_lines: &lines[LIST_START..roster_end],
        metadata_lines: &lines[roster_end..expected],
        hashed_span: &lines[..roster_end],
    })
}
