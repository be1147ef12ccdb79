use chrono::{Datelike, NaiveDate};

use crate::cron::Cron;

/// Whether `date` satisfies the cron's calendar fields.
///
/// When both day-of-month and day-of-week are restricted a date matches if
/// *either* day field matches (classic unix cron). Otherwise all fields must
/// match; an unrestricted day field always does.
pub fn is_date_eligible(cron: &Cron, date: NaiveDate) -> bool {
    if !cron.month().contains(date.month()) {
        return false;
    }

    let date_match = cron.date().contains(date.day());
    let week_match = cron.week().contains(date.weekday().num_days_from_sunday());

    if !cron.date().allows_all() && !cron.week().allows_all() {
        date_match || week_match
    } else {
        date_match && week_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cron::parse_cron;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn both_day_fields_restricted_is_a_disjunction() {
        let cron = parse_cron("0 0 1,15 * 3").unwrap();
        // Sunday the 15th: day-of-month match only.
        assert!(is_date_eligible(&cron, ymd(2020, 11, 15)));
        // Wednesday the 11th: weekday match only.
        assert!(is_date_eligible(&cron, ymd(2020, 11, 11)));
        // Thursday the 12th: neither.
        assert!(!is_date_eligible(&cron, ymd(2020, 11, 12)));
    }

    #[test]
    fn only_day_of_month_restricted() {
        let cron = parse_cron("0 0 15 * *").unwrap();
        assert!(is_date_eligible(&cron, ymd(2020, 11, 15)));
        assert!(!is_date_eligible(&cron, ymd(2020, 11, 11)));
    }

    #[test]
    fn only_weekday_restricted() {
        let cron = parse_cron("0 0 * * WED").unwrap();
        assert!(is_date_eligible(&cron, ymd(2020, 11, 11)));
        assert!(!is_date_eligible(&cron, ymd(2020, 11, 15)));
    }

    #[test]
    fn month_always_has_to_match() {
        let cron = parse_cron("0 0 1,15 JAN 3").unwrap();
        assert!(!is_date_eligible(&cron, ymd(2020, 11, 15)));
        assert!(!is_date_eligible(&cron, ymd(2020, 11, 11)));
        assert!(is_date_eligible(&cron, ymd(2021, 1, 6)));
    }

    #[test]
    fn stepped_star_day_counts_as_unrestricted() {
        // `*/1` expands to the full range, so the weekday alone decides.
        let cron = parse_cron("0 0 */1 * 1").unwrap();
        assert!(is_date_eligible(&cron, ymd(2020, 11, 9)));
        assert!(!is_date_eligible(&cron, ymd(2020, 11, 10)));
    }
}
