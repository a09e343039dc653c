//! Where the query text comes from.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{CliError, Result};

/// The source of the query to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource {
    /// Text given on the command line.
    Text(String),
    /// A file given with `--file`.
    File(PathBuf),
    /// Piped standard input.
    Stdin,
}

impl QuerySource {
    /// Picks the source from the command-line arguments. Inline text wins
    /// over a file; with neither, stdin is used.
    #[must_use]
    pub fn new(sql: Option<String>, file: Option<PathBuf>) -> Self {
        match (sql, file) {
            (Some(sql), _) => Self::Text(sql),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }

    /// Reads the query text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or stdin cannot be read, or if stdin is
    /// an interactive terminal.
    pub fn read(self) -> Result<String> {
        match self {
            Self::Text(sql) => Ok(sql),
            Self::File(path) => {
                debug!(path = %path.display(), "reading query file");
                fs::read_to_string(&path).map_err(|source| CliError::ReadFile { path, source })
            }
            Self::Stdin => {
                let stdin = io::stdin();
                let interactive = stdin.is_terminal();
                read_piped(stdin.lock(), interactive)
            }
        }
    }
}

/// Reads piped query text, refusing to wait on an interactive terminal.
///
/// # Errors
///
/// Returns [`CliError::NoInput`] when `interactive` is set, or
/// [`CliError::Stdin`] if reading fails.
pub fn read_piped(reader: impl Read, interactive: bool) -> Result<String> {
    if interactive {
        return Err(CliError::NoInput);
    }
    read_from(reader)
}

/// Reads all query text from `reader`.
///
/// # Errors
///
/// Returns [`CliError::Stdin`] if reading fails.
pub fn read_from(mut reader: impl Read) -> Result<String> {
    let mut sql = String::new();
    reader.read_to_string(&mut sql).map_err(CliError::Stdin)?;
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_source_precedence() {
        assert_eq!(
            QuerySource::new(Some("SELECT 1".into()), Some("q.sql".into())),
            QuerySource::Text("SELECT 1".into())
        );
        assert_eq!(
            QuerySource::new(None, Some("q.sql".into())),
            QuerySource::File("q.sql".into())
        );
        assert_eq!(QuerySource::new(None, None), QuerySource::Stdin);
    }

    #[test]
    fn test_read_text() {
        let sql = QuerySource::Text("SELECT a FROM t".into()).read().unwrap();
        assert_eq!(sql, "SELECT a FROM t");
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "SELECT id\nFROM users").unwrap();
        let sql = QuerySource::File(file.path().to_path_buf()).read().unwrap();
        assert_eq!(sql, "SELECT id\nFROM users\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.sql");
        let err = QuerySource::File(path.clone()).read().unwrap_err();
        assert!(matches!(err, CliError::ReadFile { path: p, .. } if p == path));
    }

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_terminal_stdin_is_no_input() {
        let err = read_piped(io::Cursor::new("SELECT 1"), true).unwrap_err();
        assert!(matches!(err, CliError::NoInput));
        assert!(err.to_string().starts_with("No query given"));
    }

    #[test]
    fn test_piped_stdin() {
        let sql = read_piped(io::Cursor::new("SELECT 1"), false).unwrap();
        assert_eq!(sql, "SELECT 1");
    }

    #[test]
    fn test_stdin_read_failure() {
        let err = read_piped(BrokenPipe, false).unwrap_err();
        assert!(
            matches!(&err, CliError::Stdin(e) if e.kind() == io::ErrorKind::BrokenPipe)
        );
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_invalid_utf8_is_stdin_error() {
        let err = read_from(io::Cursor::new(vec![0xff, 0xfe])).unwrap_err();
        assert!(matches!(err, CliError::Stdin(_)));
    }

    #[test]
    fn test_read_from_reader() {
        let sql = read_from(io::Cursor::new("DESCRIBE users")).unwrap();
        assert_eq!(sql, "DESCRIBE users");
    }
}
