//! Error types.
//!
//! Every failure the library can report is a [`SimError`]. Input problems
//! are detected before a run starts; the engines themselves cannot fail on
//! validated input.

use std::fmt;
use std::io;

use crate::validation::ValidationError;

/// Library result alias.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors reported to the caller.
#[derive(Debug)]
pub enum SimError {
    /// One or more process records were rejected (`InvalidRecord`, `DuplicateId`).
    Validation(Vec<ValidationError>),
    /// No processes were supplied, so no averages can be computed.
    EmptyInput,
    /// A process file row could not be parsed.
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the row.
        message: String,
    },
    /// Reading input or writing a report failed.
    Io(io::Error),
    /// The simulation configuration is unusable.
    Config(String),
}

impl SimError {
    /// Creates a parse error for the given 1-based line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "invalid process input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{}", e.message)?;
                }
                Ok(())
            }
            Self::EmptyInput => write!(f, "no processes to schedule"),
            Self::Parse { line, message } => write!(f, "line {line}: {message}"),
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Config(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SimError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<Vec<ValidationError>> for SimError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}
