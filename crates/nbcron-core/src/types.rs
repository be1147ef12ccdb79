use serde::{Deserialize, Serialize};

/// Which calendar rule decides whether February has 29 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapYearRule {
    /// Divisible by 4, except centuries not divisible by 400.
    #[default]
    Gregorian,
    /// Divisible by 4 *and* 100 *and* 400.
    ///
    /// Reproduces the schedule previews of older releases, which treated
    /// years such as 2024 and 2028 as common years.
    Legacy,
}

impl LeapYearRule {
    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            LeapYearRule::Gregorian => year % 4 == 0 && (year % 100 != 0 || year % 400 == 0),
            LeapYearRule::Legacy => year % 4 == 0 && year % 100 == 0 && year % 400 == 0,
        }
    }
}

impl std::fmt::Display for LeapYearRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LeapYearRule::Gregorian => "gregorian",
            LeapYearRule::Legacy => "legacy",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for LeapYearRule {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "gregorian" => Ok(LeapYearRule::Gregorian),
            "legacy" => Ok(LeapYearRule::Legacy),
            other => Err(format!("unknown leap year rule: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_rule() {
        let rule = LeapYearRule::Gregorian;
        assert!(rule.is_leap_year(2024));
        assert!(rule.is_leap_year(2000));
        assert!(!rule.is_leap_year(1900));
        assert!(!rule.is_leap_year(2023));
    }

    #[test]
    fn legacy_rule_only_accepts_quadricentennial_years() {
        let rule = LeapYearRule::Legacy;
        assert!(rule.is_leap_year(2000));
        assert!(!rule.is_leap_year(2024));
        assert!(!rule.is_leap_year(2028));
        assert!(!rule.is_leap_year(1900));
    }

    #[test]
    fn default_is_gregorian() {
        assert_eq!(LeapYearRule::default(), LeapYearRule::Gregorian);
    }

    #[test]
    fn parses_and_displays() {
        assert_eq!("legacy".parse::<LeapYearRule>(), Ok(LeapYearRule::Legacy));
        assert_eq!(LeapYearRule::Gregorian.to_string(), "gregorian");
        assert!("julian".parse::<LeapYearRule>().is_err());
    }
}
