use crate::model::Corner;
use thiserror::Error;

/// Why a raw corner weight was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIssue {
    Missing,
    NotNumeric,
    Negative,
    OutOfRange,
}

impl std::fmt::Display for InputIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::Missing => "no value entered",
            Self::NotNumeric => "not a whole number",
            Self::Negative => "weight cannot be negative",
            Self::OutOfRange => "weight is too large",
        };
        f.write_str(msg)
    }
}

#[derive(Error, Debug)]
pub enum DistCalcError {
    #[error("Invalid {corner} weight: {reason}")]
    InvalidInput { corner: Corner, reason: InputIssue },

    #[error("Total weight is zero, percentages are undefined")]
    DivisionByZero,

    #[error("Expected {expected} columns (label,fl,fr,rl,rr), found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("Unknown template placeholder '{{{token}}}'")]
    UnknownPlaceholder { token: String },

    #[error("Unterminated placeholder starting at byte {offset}")]
    MalformedTemplate { offset: usize },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type DcResult<T> = Result<T, DistCalcError>;
