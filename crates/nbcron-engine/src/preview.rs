use chrono::NaiveDateTime;
use nbcron_core::{config::DEFAULT_PREVIEW_COUNT, LeapYearRule, NbcronConfig};
use serde::Serialize;

use crate::{cron::parse_cron, describe::Describer, error::Result};

/// Summary shown next to a schedule: its phrase and the next few runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulePreview {
    pub expression: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    pub next_runs: Vec<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Number of upcoming runs to list.
    pub count: usize,
    pub time_zone: Option<String>,
    pub leap_year_rule: LeapYearRule,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_PREVIEW_COUNT,
            time_zone: None,
            leap_year_rule: LeapYearRule::default(),
        }
    }
}

impl From<&NbcronConfig> for PreviewOptions {
    fn from(config: &NbcronConfig) -> Self {
        Self {
            count: config.display.preview_count,
            time_zone: config.display.time_zone.clone(),
            leap_year_rule: config.engine.leap_year_rule,
        }
    }
}

/// Parse `expression` and build its preview relative to `reference`.
///
/// The description's time zone conversion is anchored on the reference date.
pub fn preview(
    expression: &str,
    reference: NaiveDateTime,
    options: &PreviewOptions,
) -> Result<SchedulePreview> {
    let cron = parse_cron(expression)?;

    let mut describer = Describer::new().with_anchor_date(reference.date());
    if let Some(tz) = options.time_zone.as_deref() {
        describer = describer.with_time_zone(tz);
    }

    Ok(SchedulePreview {
        expression: expression.trim().to_string(),
        description: describer.describe(&cron),
        time_zone: options.time_zone.clone(),
        next_runs: cron
            .upcoming(reference, options.leap_year_rule)
            .take(options.count)
            .collect(),
    })
}
