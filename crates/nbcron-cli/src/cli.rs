use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use nbcron_core::config::MAX_PREVIEW_COUNT;

/// Inspect five-field cron expressions.
#[derive(Parser, Debug)]
#[command(name = "nbcron", about = "Describe cron expressions and preview their next runs")]
pub struct CliArgs {
    /// Path to config file (default: $NBCRON_CONFIG or ~/.nbcron/nbcron.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the English phrase for an expression
    Describe {
        expression: String,
        /// IANA zone used to display the time of day
        #[arg(long)]
        tz: Option<String>,
    },
    /// Print the next execution instants
    Next {
        expression: String,
        #[command(flatten)]
        window: WindowArgs,
        /// Treat only years divisible by 400 as leap years
        #[arg(long)]
        legacy_leap_years: bool,
    },
    /// Print description and upcoming runs together
    Preview {
        expression: String,
        #[command(flatten)]
        window: WindowArgs,
        #[arg(long)]
        tz: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct WindowArgs {
    /// Reference instant, YYYY-MM-DDTHH:MM (default: now, UTC)
    #[arg(long, value_parser = parse_reference)]
    pub from: Option<NaiveDateTime>,

    /// Number of runs to list (default: display.preview_count)
    #[arg(long, value_parser = parse_count)]
    pub count: Option<usize>,
}

pub const REFERENCE_FORMAT: &str = "%Y-%m-%dT%H:%M";

fn parse_reference(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, REFERENCE_FORMAT)
        .map_err(|e| format!("expected {REFERENCE_FORMAT}: {e}"))
}

fn parse_count(s: &str) -> Result<usize, String> {
    let count: usize = s.parse().map_err(|e| format!("{e}"))?;
    if count == 0 || count > MAX_PREVIEW_COUNT {
        return Err(format!("must be between 1 and {MAX_PREVIEW_COUNT}"));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_next_subcommand() {
        let args = CliArgs::try_parse_from([
            "nbcron",
            "next",
            "0 9 * * MON",
            "--from",
            "2020-11-11T11:11",
            "--count",
            "3",
            "--legacy-leap-years",
        ])
        .unwrap();
        match args.command {
            Command::Next {
                expression,
                window,
                legacy_leap_years,
            } => {
                assert_eq!(expression, "0 9 * * MON");
                assert_eq!(window.from.unwrap().to_string(), "2020-11-11 11:11:00");
                assert_eq!(window.count, Some(3));
                assert!(legacy_leap_years);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_reference() {
        assert!(CliArgs::try_parse_from(["nbcron", "next", "* * * * *", "--from", "yesterday"]).is_err());
    }

    #[test]
    fn count_must_be_in_range() {
        for count in ["0", "101", "-1", "many"] {
            assert!(
                CliArgs::try_parse_from(["nbcron", "next", "* * * * *", "--count", count]).is_err(),
                "{count}"
            );
        }
        let args =
            CliArgs::try_parse_from(["nbcron", "preview", "* * * * *", "--count", "100"]).unwrap();
        match args.command {
            Command::Preview { window, .. } => assert_eq!(window.count, Some(100)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_config_flag() {
        let args =
            CliArgs::try_parse_from(["nbcron", "describe", "0 0 * * *", "--config", "x.toml"]).unwrap();
        assert_eq!(args.config.as_deref(), Some("x.toml"));
    }
}
