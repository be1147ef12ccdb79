use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use nbcron_core::LeapYearRule;
use tracing::debug;

use crate::{
    calendar::days_in_month,
    cron::Cron,
    eligibility::is_date_eligible,
    error::{CronError, Result},
};

/// How many years past the reference year the day search may look.
///
/// Month/day patterns repeat at most yearly; four years also covers Feb 29.
pub const SEARCH_WINDOW_YEARS: i32 = 4;

/// A candidate answer, filled in one component at a time.
#[derive(Debug, Default, Clone, Copy)]
struct ResolvedInstant {
    year: Option<i32>,
    month: Option<u32>,
    date: Option<u32>,
    hour: Option<u32>,
    minute: Option<u32>,
}

impl ResolvedInstant {
    fn with_day(self, day: NaiveDate) -> Self {
        Self {
            year: Some(day.year()),
            month: Some(day.month()),
            date: Some(day.day()),
            ..self
        }
    }

    fn with_time(self, hour: u32, minute: u32) -> Self {
        Self {
            hour: Some(hour),
            minute: Some(minute),
            ..self
        }
    }

    fn build(self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year?, self.month?, self.date?)?.and_hms_opt(
            self.hour?,
            self.minute?,
            0,
        )
    }
}

/// Earliest instant strictly after `reference` (minute precision) matching `cron`,
/// using the Gregorian leap-year rule.
pub fn next_execution_after(cron: &Cron, reference: NaiveDateTime) -> Result<NaiveDateTime> {
    next_execution_with(cron, reference, LeapYearRule::default())
}

/// Same as [`next_execution_after`] with an explicit leap-year rule.
pub fn next_execution_with(
    cron: &Cron,
    reference: NaiveDateTime,
    rule: LeapYearRule,
) -> Result<NaiveDateTime> {
    let today = reference.date();
    let same_day = if is_date_eligible(cron, today) {
        later_time_today(cron, reference.hour(), reference.minute())
    } else {
        None
    };

    let resolved = match same_day {
        Some((hour, minute)) => ResolvedInstant::default()
            .with_day(today)
            .with_time(hour, minute),
        None => ResolvedInstant::default()
            .with_day(next_eligible_day(cron, today, rule)?)
            .with_time(cron.hour().first(), cron.minute().first()),
    };

    let next = resolved.build().ok_or(CronError::SearchExhausted {
        years: SEARCH_WINDOW_YEARS,
    })?;
    debug!(%reference, %next, "next execution resolved");
    Ok(next)
}

/// First cron hour/minute later than `hour:minute` on the same day.
fn later_time_today(cron: &Cron, hour: u32, minute: u32) -> Option<(u32, u32)> {
    if cron.hour().contains(hour) {
        if let Some(&m) = cron.minute().values().iter().find(|&&m| m > minute) {
            return Some((hour, m));
        }
    }
    cron.hour()
        .values()
        .iter()
        .find(|&&h| h > hour)
        .map(|&h| (h, cron.minute().first()))
}

/// First eligible day after `after`, scanning every day of each cron month.
///
/// A day-level scan is needed because of the day-of-month/day-of-week
/// disjunction; the month field alone cannot be indexed directly.
fn next_eligible_day(cron: &Cron, after: NaiveDate, rule: LeapYearRule) -> Result<NaiveDate> {
    for offset in 0..=SEARCH_WINDOW_YEARS {
        let year = after.year() + offset;
        for &month in cron.month().values() {
            let first_day = match (offset, month.cmp(&after.month())) {
                (0, Ordering::Less) => continue,
                (0, Ordering::Equal) => after.day() + 1,
                _ => 1,
            };
            for day in first_day..=days_in_month(year, month, rule) {
                let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                    continue;
                };
                if is_date_eligible(cron, date) {
                    return Ok(date);
                }
            }
        }
    }
    debug!(%after, %rule, "no eligible day inside the search window");
    Err(CronError::SearchExhausted {
        years: SEARCH_WINDOW_YEARS,
    })
}

/// Successive execution instants, each strictly after the previous one.
///
/// Ends early only if the search window is exhausted.
#[derive(Debug, Clone)]
pub struct Upcoming<'a> {
    cron: &'a Cron,
    cursor: NaiveDateTime,
    rule: LeapYearRule,
    exhausted: bool,
}

impl Iterator for Upcoming<'_> {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match next_execution_with(self.cron, self.cursor, self.rule) {
            Ok(next) => {
                self.cursor = next;
                Some(next)
            }
            Err(_) => {
                self.exhausted = true;
                None
            }
        }
    }
}

impl Cron {
    /// Iterate over the execution instants following `reference`.
    pub fn upcoming(&self, reference: NaiveDateTime, rule: LeapYearRule) -> Upcoming<'_> {
        Upcoming {
            cron: self,
            cursor: reference,
            rule,
            exhausted: false,
        }
    }
}
