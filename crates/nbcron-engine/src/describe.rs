//! English rendering of a parsed cron.
//!
//! Clauses are emitted in a fixed order (day prefix, day-of-month, month,
//! weekday, time) and only for restricted fields. Fields whose values form a
//! full-span progression are phrased as "every Nth" instead of being listed.
//!
//! Cron times are UTC wall-clock times. When a display zone is given, a
//! single time of day is converted into that zone using the offset in effect
//! on the describer's anchor date.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::{
    cron::{parse_cron, Cron},
    field::FieldValues,
    names::{month_name, weekday_name},
};

/// Renders crons as phrases such as "Every day at 2:00 PM".
#[derive(Debug, Clone)]
pub struct Describer {
    time_zone: Option<Tz>,
    anchor: NaiveDate,
}

impl Default for Describer {
    fn default() -> Self {
        Self::new()
    }
}

impl Describer {
    /// No display zone, anchored on today's UTC date.
    pub fn new() -> Self {
        Self {
            time_zone: None,
            anchor: Utc::now().date_naive(),
        }
    }

    /// Display times in the IANA zone `name`; unknown names fall back to UTC.
    pub fn with_time_zone(mut self, name: &str) -> Self {
        self.time_zone = Some(parse_tz(name));
        self
    }

    /// Date whose UTC offset is used for the zone conversion.
    pub fn with_anchor_date(mut self, anchor: NaiveDate) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn describe(&self, cron: &Cron) -> String {
        let single_time = cron.minute().is_single() && cron.hour().is_single();
        let has_date_clause = !cron.date().allows_all();
        let mut clauses: Vec<String> = Vec::new();

        if cron.date().allows_all() && cron.week().allows_all() && single_time {
            clauses.push("every day".to_string());
        }

        if has_date_clause {
            clauses.push(match cron.date().interval() {
                Some(n) => format!("every {} days", ordinal(n)),
                None => {
                    let days = join_and(cron.date().values().iter().map(|&d| ordinal(d)));
                    if cron.month().allows_all() {
                        format!("on the {days} of every month")
                    } else {
                        format!("on the {days}")
                    }
                }
            });
        }

        if !cron.month().allows_all() {
            let months = match cron.month().interval() {
                Some(n) => format!("every {} month", ordinal(n)),
                None => join_and(cron.month().values().iter().map(|&m| month_name(m).to_string())),
            };
            clauses.push(if has_date_clause {
                format!("of {months}")
            } else {
                months
            });
        }

        if !cron.week().allows_all() {
            let days = join_and(cron.week().values().iter().map(|&d| weekday_name(d).to_string()));
            clauses.push(if has_date_clause {
                format!("and on {days}")
            } else {
                format!("on {days}")
            });
        }

        clauses.push(self.time_clause(cron, single_time));
        capitalize(clauses.join(" ").trim())
    }

    fn time_clause(&self, cron: &Cron, single_time: bool) -> String {
        if single_time {
            return format!(
                "at {}",
                self.clock_time(cron.hour().first(), cron.minute().first())
            );
        }
        let minutes = field_phrase(cron.minute(), "minute");
        let hours = field_phrase(cron.hour(), "hour");
        let joiner = if cron.hour().allows_all() { "of" } else { "past" };
        format!("at {minutes} {joiner} {hours}")
    }

    /// 12-hour clock time, e.g. "2:15 PM".
    fn clock_time(&self, hour: u32, minute: u32) -> String {
        const FORMAT: &str = "%-I:%M %p";
        let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) else {
            return format!("{hour}:{minute:02}");
        };
        match self.time_zone {
            Some(tz) => Utc
                .from_utc_datetime(&self.anchor.and_time(time))
                .with_timezone(&tz)
                .format(FORMAT)
                .to_string(),
            None => time.format(FORMAT).to_string(),
        }
    }
}

/// Describe `cron`, optionally rendering its time of day in `time_zone`.
///
/// The zone offset is taken for today's UTC date, so a zone with daylight
/// saving time renders differently across the year. Use
/// [`Describer::with_anchor_date`] to pin the date.
pub fn describe_cron(cron: &Cron, time_zone: Option<&str>) -> String {
    let describer = match time_zone {
        Some(tz) => Describer::new().with_time_zone(tz),
        None => Describer::new(),
    };
    describer.describe(cron)
}

/// Parse and describe `expression`; an unparsable expression is returned verbatim.
pub fn describe_expression(expression: &str, time_zone: Option<&str>) -> String {
    match parse_cron(expression) {
        Ok(cron) => describe_cron(&cron, time_zone),
        Err(e) => {
            warn!(%expression, error = %e, "cannot describe cron expression, showing it raw");
            expression.to_string()
        }
    }
}

/// Parse an IANA zone name, falling back to UTC.
pub fn parse_tz(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|_| {
        warn!(time_zone = %name, "unknown time zone, using UTC");
        chrono_tz::UTC
    })
}

/// "every minute", "every 15th minute" or "minute 5 and 35".
fn field_phrase(field: &FieldValues, unit: &str) -> String {
    if field.allows_all() {
        return format!("every {unit}");
    }
    match field.interval() {
        Some(n) => format!("every {} {unit}", ordinal(n)),
        None => format!(
            "{unit} {}",
            join_and(field.values().iter().map(|v| v.to_string()))
        ),
    }
}

/// `1st`, `2nd`, `3rd`, `4th`, … with 11–13 always `th`.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// `a`, `a and b`, `a, b and c`.
pub fn join_and<I>(items: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut items: Vec<String> = items.into_iter().collect();
    let Some(last) = items.pop() else {
        return String::new();
    };
    if items.is_empty() {
        last
    } else {
        format!("{} and {last}", items.join(", "))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
