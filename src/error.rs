//! Error types for the crate.

use thiserror::Error;

/// The broad category an [`Error`] belongs to.
///
/// Operations between incompatible types are rejected by the type checker, so
/// there is no runtime category for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value is outside of its domain, or a constructor was given an
    /// insufficient or inconsistent set of parameters.
    Validation,
    /// A string did not match the expected pattern.
    Format,
}

/// Error type for all fallible operations in the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("year {year} is out of range")]
    YearOutOfRange { year: i32 },

    #[error("month must be in 1..12")]
    InvalidMonth { month: i32 },

    #[error("day {day} is out of range for {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: i32 },

    #[error("week_num must be 1..53")]
    InvalidWeekNum { week_num: i32 },

    #[error("year {iso_year} has only {weeks} weeks")]
    TooFewWeeks { iso_year: i32, weeks: u8 },

    #[error("bad weekday number {weekday}; must be 0 (Monday) to 6 (Sunday)")]
    InvalidWeekday { weekday: i32 },

    #[error("quarter must be in 1..4")]
    InvalidQuarter { quarter: i32 },

    #[error("half must be 1 or 2")]
    InvalidHalfYear { half: i32 },

    /// A date computation left the supported calendar (0001-01-01 to 9999-12-31).
    #[error("date is out of range")]
    DateOutOfRange,

    #[error("duration mismatch: expected {expected}, got {got}")]
    DurationMismatch { expected: String, got: String },

    #[error("too few arguments specified for {type_name}")]
    TooFewArguments { type_name: &'static str },

    #[error("{type_name} doesn't accept both duration and {unit}")]
    ConflictingDuration {
        type_name: &'static str,
        unit: &'static str,
    },

    #[error("failed to parse {type_name} from {input:?}")]
    Parse {
        type_name: &'static str,
        input: String,
    },

    #[error("invalid string for {type_name}: {input:?}")]
    Syntax {
        type_name: &'static str,
        input: String,
    },

    #[error("invalid format pattern {pattern:?}: {reason}")]
    Pattern {
        pattern: String,
        reason: &'static str,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse { .. } | Error::Syntax { .. } | Error::Pattern { .. } => {
                ErrorKind::Format
            }
            _ => ErrorKind::Validation,
        }
    }

    pub(crate) fn parse(type_name: &'static str, input: &str) -> Self {
        Error::Parse {
            type_name,
            input: input.to_string(),
        }
    }
}
