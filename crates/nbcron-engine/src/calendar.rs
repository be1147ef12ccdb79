use nbcron_core::LeapYearRule;

/// Number of days in `month` (1–12) of `year` under `rule`.
pub fn days_in_month(year: i32, month: u32, rule: LeapYearRule) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if rule.is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
