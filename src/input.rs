//! Process file parsing.
//!
//! Reads the line-oriented process description format:
//!
//! ```text
//! # pid  arrival_time  burst_time  priority
//! P1     0             8           2
//! P2     1             4           1
//! ```
//!
//! Blank lines and `#` comments are ignored. Lines with the wrong field
//! count are silently skipped; a field that fails to parse as a number
//! aborts the whole run.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::Process;

/// Why a process file could not be read.
#[derive(Debug)]
pub enum InputError {
    /// The file could not be opened or read.
    Io(io::Error),
    /// A numeric field failed to parse.
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending field text.
        value: String,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(err) => write!(f, "cannot read process file: {err}"),
            InputError::InvalidNumber { line, value } => {
                write!(f, "line {line}: invalid number '{value}'")
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(err) => Some(err),
            InputError::InvalidNumber { .. } => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

/// Parses a process file into a process set sorted by arrival time.
pub fn parse_input(path: &Path) -> Result<Vec<Process>, InputError> {
    let contents = fs::read_to_string(path)?;
    let mut processes = Vec::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            continue;
        }

        let number = index + 1;
        let arrival_time = parse_field::<i64>(fields[1], number)?;
        let burst_time = parse_field::<i64>(fields[2], number)?;
        let priority = parse_field::<i32>(fields[3], number)?;

        processes.push(
            Process::new(fields[0], arrival_time, burst_time).with_priority(priority),
        );
    }

    processes.sort_by_key(|p| p.arrival_time);
    Ok(processes)
}

fn parse_field<T: std::str::FromStr>(field: &str, line: usize) -> Result<T, InputError> {
    field.parse().map_err(|_| InputError::InvalidNumber {
        line,
        value: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_basic_file() {
        let file = write_file(
            "# comment\n\
             P1 0 8 2\n\
             P2 1 4 1\n\
             \n\
             P3 2 9 3\n",
        );
        let processes = parse_input(file.path()).unwrap();
        assert_eq!(processes.len(), 3);
        assert_eq!(processes[0].pid, "P1");
        assert_eq!(processes[0].arrival_time, 0);
        assert_eq!(processes[0].burst_time, 8);
        assert_eq!(processes[0].priority, 2);
        assert_eq!(processes[0].remaining_time, 8);
    }

    #[test]
    fn test_result_sorted_by_arrival() {
        let file = write_file("P2 5 1 0\nP1 0 1 0\n");
        let processes = parse_input(file.path()).unwrap();
        assert_eq!(processes[0].pid, "P1");
        assert_eq!(processes[1].pid, "P2");
    }

    #[test]
    fn test_wrong_field_count_skipped() {
        let file = write_file("P1 0 8\nP2 1 4 1\nP3 2 9 3 extra\n");
        let processes = parse_input(file.path()).unwrap();
        assert_eq!(processes.len(), 1);
        assert_eq!(processes[0].pid, "P2");
    }

    #[test]
    fn test_invalid_number_aborts() {
        let file = write_file("P1 0 8 2\nP2 one 4 1\n");
        let err = parse_input(file.path()).unwrap_err();
        match err {
            InputError::InvalidNumber { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "one");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = parse_input(Path::new("/nonexistent/processes.txt")).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }

    #[test]
    fn test_comments_and_blanks_only() {
        let file = write_file("# a\n\n# b\n");
        let processes = parse_input(file.path()).unwrap();
        assert!(processes.is_empty());
    }
}
