//! Reading a file into an ordered sequence of lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;

/// Reads the named file and returns its lines in order, with line terminators stripped.
///
/// The file handle is scoped to this call and released on both success and failure. Any I/O
/// problem (missing file, permission, encoding) surfaces as [`Error::Io`].
pub fn read_all_lines(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let file = File::open(path)?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        lines.push(line?);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_lines_in_order_and_strips_terminators() -> Result<(), Error> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "first\r\nsecond\nthird")?;
        let lines = read_all_lines(file.path())?;
        assert_eq!(lines, vec!["first", "second", "third"]);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_all_lines("/definitely/not/a/real/file").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
