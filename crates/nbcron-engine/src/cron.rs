use serde::Serialize;
use tracing::debug;

use crate::{
    error::{CronError, Result},
    field::{parse_field, FieldSpec, FieldValues},
};

/// A parsed five-field cron expression.
///
/// Immutable once built; every consumer (eligibility, next-run search,
/// rendering) only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cron {
    minute: FieldValues,
    hour: FieldValues,
    date: FieldValues,
    month: FieldValues,
    week: FieldValues,
}

impl Cron {
    pub fn minute(&self) -> &FieldValues {
        &self.minute
    }

    pub fn hour(&self) -> &FieldValues {
        &self.hour
    }

    /// Day-of-month field (1–31).
    pub fn date(&self) -> &FieldValues {
        &self.date
    }

    pub fn month(&self) -> &FieldValues {
        &self.month
    }

    /// Day-of-week field (0–6, 0 = Sunday).
    pub fn week(&self) -> &FieldValues {
        &self.week
    }
}

impl std::str::FromStr for Cron {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        parse_cron(s)
    }
}

/// Parse `minute hour day-of-month month day-of-week`.
pub fn parse_cron(expression: &str) -> Result<Cron> {
    let normalized = expression.trim().to_uppercase();
    let parts: Vec<&str> = normalized.split(' ').collect();
    let [minute, hour, date, month, week] = parts.as_slice() else {
        return Err(CronError::Structural { found: parts.len() });
    };

    let cron = Cron {
        minute: parse_field(minute, &FieldSpec::MINUTE)?,
        hour: parse_field(hour, &FieldSpec::HOUR)?,
        date: parse_field(date, &FieldSpec::DAY_OF_MONTH)?,
        month: parse_field(month, &FieldSpec::MONTH)?,
        week: parse_field(week, &FieldSpec::DAY_OF_WEEK)?,
    };
    debug!(%expression, "cron expression parsed");
    Ok(cron)
}
