mod cli;

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Timelike, Utc};
use clap::Parser;
use nbcron_core::{LeapYearRule, NbcronConfig};
use nbcron_engine::{describe_expression, parse_cron, preview, PreviewOptions};

use crate::cli::{CliArgs, Command, WindowArgs};

const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nbcron=warn,nbcron_engine=warn".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    // load config: --config > NBCRON_CONFIG env > ~/.nbcron/nbcron.toml
    let config_path = args.config.or_else(|| std::env::var("NBCRON_CONFIG").ok());
    let config = NbcronConfig::load(config_path.as_deref()).context("failed to load configuration")?;

    match args.command {
        Command::Describe { expression, tz } => {
            let tz = tz.or_else(|| config.display.time_zone.clone());
            println!("{}", describe_expression(&expression, tz.as_deref()));
        }
        Command::Next {
            expression,
            window,
            legacy_leap_years,
        } => {
            let cron = parse_cron(&expression)
                .with_context(|| format!("invalid cron expression `{expression}`"))?;
            let rule = if legacy_leap_years {
                LeapYearRule::Legacy
            } else {
                config.engine.leap_year_rule
            };
            let (reference, count) = resolve_window(&window, &config);
            let runs: Vec<NaiveDateTime> = cron.upcoming(reference, rule).take(count).collect();
            if runs.is_empty() {
                anyhow::bail!("no execution of `{expression}` found after {reference}");
            }
            for run in runs {
                println!("{}", run.format(OUTPUT_FORMAT));
            }
        }
        Command::Preview {
            expression,
            window,
            tz,
            json,
        } => {
            let (reference, count) = resolve_window(&window, &config);
            let mut options = PreviewOptions::from(&config);
            options.count = count;
            if tz.is_some() {
                options.time_zone = tz;
            }
            let preview = preview(&expression, reference, &options)
                .with_context(|| format!("invalid cron expression `{expression}`"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&preview)?);
            } else {
                println!("{}", preview.description);
                for run in &preview.next_runs {
                    println!("  {}", run.format(OUTPUT_FORMAT));
                }
            }
        }
    }
    Ok(())
}

/// Reference instant (truncated to the minute) and run count for a listing.
fn resolve_window(window: &WindowArgs, config: &NbcronConfig) -> (NaiveDateTime, usize) {
    let now = Utc::now().naive_utc();
    let reference = window
        .from
        .unwrap_or_else(|| now.with_second(0).unwrap_or(now));
    let count = window.count.unwrap_or(config.display.preview_count);
    tracing::debug!(%reference, count, "listing window");
    (reference, count)
}
