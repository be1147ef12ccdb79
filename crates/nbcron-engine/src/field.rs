//! Single-field parsing: one of the five comma-separated cron subexpressions
//! into a normalized, sorted value set.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    error::{CronError, Result},
    names::{MONTH_ABBREVIATIONS, WEEKDAY_ABBREVIATIONS},
};

/// Legal range and symbolic names of one cron field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
    /// Number of values in `[min, max]`.
    pub full_range_size: u32,
    /// Abbreviations resolved before numeric parsing; index 0 maps to `min`.
    pub names: Option<&'static [&'static str]>,
}

impl FieldSpec {
    pub const MINUTE: FieldSpec = FieldSpec::new("minute", 0, 59, 60);
    pub const HOUR: FieldSpec = FieldSpec::new("hour", 0, 23, 24);
    pub const DAY_OF_MONTH: FieldSpec = FieldSpec::new("day-of-month", 1, 31, 31);
    pub const MONTH: FieldSpec =
        FieldSpec::new("month", 1, 12, 12).with_names(&MONTH_ABBREVIATIONS);
    pub const DAY_OF_WEEK: FieldSpec =
        FieldSpec::new("day-of-week", 0, 6, 7).with_names(&WEEKDAY_ABBREVIATIONS);

    pub const fn new(name: &'static str, min: u32, max: u32, full_range_size: u32) -> Self {
        Self {
            name,
            min,
            max,
            full_range_size,
            names: None,
        }
    }

    pub const fn with_names(self, names: &'static [&'static str]) -> Self {
        Self {
            names: Some(names),
            ..self
        }
    }

    /// Resolve one token to a value in `[min, max]`.
    fn resolve(&self, token: &str) -> Result<u32> {
        if token.is_empty() {
            return Err(self.value_error(token, "empty value"));
        }

        let named = self.names.and_then(|names| {
            names
                .iter()
                .position(|name| name.eq_ignore_ascii_case(token))
                .map(|i| self.min + i as u32)
        });

        let value = match named {
            Some(v) => v,
            None => token
                .parse::<u32>()
                .map_err(|_| self.value_error(token, "not a number or known name"))?,
        };

        if value < self.min || value > self.max {
            return Err(self.value_error(
                token,
                &format!("out of range {}-{}", self.min, self.max),
            ));
        }
        Ok(value)
    }

    fn parse_step(&self, token: &str) -> Result<u32> {
        match token.parse::<u32>() {
            Ok(0) => Err(self.value_error(token, "step must be positive")),
            Ok(step) => Ok(step),
            Err(_) => Err(self.value_error(token, "step is not a number")),
        }
    }

    fn value_error(&self, token: &str, reason: &str) -> CronError {
        CronError::FieldValue {
            field: self.name,
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// The normalized values of one cron field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValues {
    values: Vec<u32>,
    allows_all: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<u32>,
}

impl FieldValues {
    fn from_set(set: BTreeSet<u32>, spec: &FieldSpec) -> Self {
        let values: Vec<u32> = set.into_iter().collect();
        let allows_all = values.len() == spec.full_range_size as usize;
        let interval = detect_interval(&values, spec);
        Self {
            values,
            allows_all,
            interval,
        }
    }

    /// Ascending, distinct, never empty.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// `true` when every value of the field's legal range is present.
    pub fn allows_all(&self) -> bool {
        self.allows_all
    }

    /// Step of the progression when the values are "every Nth" from the minimum.
    pub fn interval(&self) -> Option<u32> {
        self.interval
    }

    pub fn contains(&self, value: u32) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    /// Smallest value.
    pub fn first(&self) -> u32 {
        self.values[0]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_single(&self) -> bool {
        self.values.len() == 1
    }
}

/// Parse one cron subexpression against `spec`.
///
/// Accepts a comma-separated list of values, names, `*` and `a-b` ranges,
/// each optionally followed by `/step`. A stepped bare value `v/step` runs
/// from `v` to the field maximum.
pub fn parse_field(subexpression: &str, spec: &FieldSpec) -> Result<FieldValues> {
    let mut set = BTreeSet::new();
    for part in subexpression.split(',') {
        expand_part(part.trim(), spec, &mut set)?;
    }
    Ok(FieldValues::from_set(set, spec))
}

fn expand_part(part: &str, spec: &FieldSpec, set: &mut BTreeSet<u32>) -> Result<()> {
    let (range, step) = match part.split_once('/') {
        Some((range, step)) => (range, Some(spec.parse_step(step)?)),
        None => (part, None),
    };

    let (start, end) = if range == "*" {
        (spec.min, spec.max)
    } else if let Some((low, high)) = range.split_once('-') {
        let start = spec.resolve(low)?;
        let end = spec.resolve(high)?;
        if end < start {
            return Err(CronError::FieldRange {
                field: spec.name,
                start,
                end,
            });
        }
        (start, end)
    } else {
        let value = spec.resolve(range)?;
        match step {
            Some(_) => (value, spec.max),
            None => (value, value),
        }
    };

    set.extend((start..=end).step_by(step.unwrap_or(1) as usize));
    Ok(())
}

/// Common difference of `values`, kept only when stepping from the field
/// minimum at that difference yields exactly `values.len()` points.
fn detect_interval(values: &[u32], spec: &FieldSpec) -> Option<u32> {
    if values.len() < 2 || values[0] != spec.min {
        return None;
    }
    let step = values[1] - values[0];
    if values.windows(2).any(|pair| pair[1] - pair[0] != step) {
        return None;
    }
    (values.len() as u32 == spec.full_range_size.div_ceil(step)).then_some(step)
}
