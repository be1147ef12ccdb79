use thiserror::Error;

/// Errors produced while parsing a cron expression or searching for its next run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronError {
    /// The expression does not split into exactly five fields.
    #[error("Invalid cron expression: must have five parts, found {found}")]
    Structural { found: usize },

    /// A token is neither a known name nor a number, or lies outside the field's range.
    #[error("Invalid {field} value `{token}`: {reason}")]
    FieldValue {
        field: &'static str,
        token: String,
        reason: String,
    },

    /// A range's upper bound precedes its lower bound.
    #[error("Invalid {field} range {start}-{end}: end precedes start")]
    FieldRange {
        field: &'static str,
        start: u32,
        end: u32,
    },

    /// No eligible date within the bounded forward search.
    #[error("No execution found within {years} years")]
    SearchExhausted { years: i32 },
}

impl CronError {
    /// Short error code string for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            CronError::Structural { .. } => "STRUCTURAL_ERROR",
            CronError::FieldValue { .. } => "FIELD_VALUE_ERROR",
            CronError::FieldRange { .. } => "FIELD_RANGE_ERROR",
            CronError::SearchExhausted { .. } => "SEARCH_EXHAUSTED",
        }
    }
}

pub type Result<T> = std::result::Result<T, CronError>;
