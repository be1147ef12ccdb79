//! `nbcron-engine` — five-field unix cron parsing, next-run search and
//! English rendering.
//!
//! # Overview
//!
//! A cron string is parsed once into an immutable [`Cron`]. Two independent
//! consumers read it: the next-execution search ([`next_execution_after`])
//! and the renderer ([`describe_cron`]). Everything is pure and synchronous;
//! there is no shared state between calls.
//!
//! # Fields
//!
//! | Field        | Range | Names   |
//! |--------------|-------|---------|
//! | minute       | 0–59  |         |
//! | hour         | 0–23  |         |
//! | day-of-month | 1–31  |         |
//! | month        | 1–12  | JAN–DEC |
//! | day-of-week  | 0–6   | SUN–SAT |
//!
//! When both day fields are restricted a date matches if *either* matches,
//! as in classic unix cron.
//!
//! ```
//! use chrono::NaiveDate;
//! use nbcron_engine::{describe_cron, next_execution_after, parse_cron};
//!
//! let cron = parse_cron("0 */1 * * *").unwrap();
//! let now = NaiveDate::from_ymd_opt(2020, 11, 11).unwrap().and_hms_opt(11, 11, 0).unwrap();
//! let next = next_execution_after(&cron, now).unwrap();
//! assert_eq!(next.to_string(), "2020-11-11 12:00:00");
//! assert_eq!(describe_cron(&parse_cron("00 14 */1 * *").unwrap(), None), "Every day at 2:00 PM");
//! ```

pub mod calendar;
pub mod cron;
pub mod describe;
pub mod eligibility;
pub mod error;
pub mod field;
pub mod names;
pub mod next;
pub mod preview;

pub use cron::{parse_cron, Cron};
pub use describe::{describe_cron, describe_expression, Describer};
pub use eligibility::is_date_eligible;
pub use error::{CronError, Result};
pub use field::{parse_field, FieldSpec, FieldValues};
pub use next::{next_execution_after, next_execution_with, Upcoming, SEARCH_WINDOW_YEARS};
pub use preview::{preview, PreviewOptions, SchedulePreview};

pub use nbcron_core::LeapYearRule;
