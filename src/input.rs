//! Process file loader.
//!
//! Reads comma-delimited rows of `id,burst,arrival[,priority]`. Fields are
//! trimmed, blank lines and `#` comments are skipped, and a missing
//! priority defaults to 0. The loaded list is validated before it is
//! returned, so duplicate ids and invalid records are rejected here.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{Result, SimError};
use crate::models::Process;
use crate::validation::validate_processes;

/// Parses processes from an in-memory string.
pub fn parse_processes(text: &str) -> Result<Vec<Process>> {
    load_processes(text.as_bytes())
}

/// Reads processes from a buffered reader.
///
/// # Errors
/// - [`SimError::Parse`] for a malformed row (1-based line number)
/// - [`SimError::Validation`] for invalid records or duplicate ids
/// - [`SimError::Io`] if reading fails
pub fn load_processes<R: BufRead>(reader: R) -> Result<Vec<Process>> {
    let mut processes = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        if let Some(process) = parse_line(i + 1, &line?)? {
            processes.push(process);
        }
    }
    validate_processes(&processes)?;
    debug!("loaded {} processes", processes.len());
    Ok(processes)
}

/// Reads processes from a file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let file = File::open(path)?;
    load_processes(BufReader::new(file))
}

fn parse_line(line_no: usize, line: &str) -> Result<Option<Process>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(SimError::parse(
            line_no,
            format!("expected 3 or 4 fields, found {}", fields.len()),
        ));
    }

    let field = |idx: usize, name: &str| -> Result<i64> {
        fields[idx].parse::<i64>().map_err(|e| {
            SimError::parse(line_no, format!("invalid {name} '{}': {e}", fields[idx]))
        })
    };

    let mut process = Process::new(field(0, "id")?, field(1, "burst")?, field(2, "arrival")?);
    if fields.len() == 4 {
        process = process.with_priority(field(3, "priority")?);
    }
    Ok(Some(process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_parse_three_and_four_fields() {
        let processes = parse_processes("1,5,0\n2, 3, 1, 4\n").unwrap();
        assert_eq!(processes, vec![Process::new(1, 5, 0), Process::new(2, 3, 1).with_priority(4)]);
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let text = "# id,burst,arrival,priority\n\n1,2,0\n   \n2,1,1\n";
        assert_eq!(parse_processes(text).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_file() {
        assert!(parse_processes("").unwrap().is_empty());
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_processes("1,2,0\n3,4\n").unwrap_err();
        match err {
            SimError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("found 2"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_integer() {
        let err = parse_processes("1,x,0\n").unwrap_err();
        assert!(matches!(err, SimError::Parse { line: 1, .. }));
        assert!(err.to_string().contains("burst"));
    }

    #[test]
    fn test_duplicate_rejected_at_load() {
        let err = parse_processes("1,2,0\n1,3,1\n").unwrap_err();
        assert_eq!(err.validation_errors()[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_invalid_record_rejected_at_load() {
        let err = parse_processes("1,0,0\n").unwrap_err();
        assert_eq!(err.validation_errors()[0].kind, ValidationErrorKind::InvalidRecord);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_file("/nonexistent/processes.csv"),
            Err(SimError::Io(_))
        ));
    }
}
