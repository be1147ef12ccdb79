use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::types::LeapYearRule;

pub const DEFAULT_PREVIEW_COUNT: usize = 5;
pub const MAX_PREVIEW_COUNT: usize = 100;

/// Top-level config (nbcron.toml + NBCRON_* env overrides).
///
/// Nested keys are separated by a double underscore in the environment,
/// e.g. `NBCRON_ENGINE__LEAP_YEAR_RULE=legacy`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NbcronConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Settings that change next-execution results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub leap_year_rule: LeapYearRule,
}

/// Settings that only affect how schedules are shown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// IANA zone name used when rendering a time of day ("Europe/Berlin").
    /// `None` renders cron times as written (UTC).
    pub time_zone: Option<String>,
    /// How many upcoming runs a preview lists.
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_zone: None,
            preview_count: DEFAULT_PREVIEW_COUNT,
        }
    }
}

fn default_preview_count() -> usize {
    DEFAULT_PREVIEW_COUNT
}

impl NbcronConfig {
    /// Load from `config_path` (or `~/.nbcron/nbcron.toml`) and the environment.
    ///
    /// A missing file is not an error; every field has a default.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: NbcronConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("NBCRON_").split("__"))
            .extract()
            .map_err(|e| crate::error::NbcronError::Config(e.to_string()))?;

        config.validate()?;
        tracing::debug!(path = %path, leap_year_rule = %config.engine.leap_year_rule, "config loaded");
        Ok(config)
    }

    fn validate(&self) -> crate::error::Result<()> {
        let count = self.display.preview_count;
        if count == 0 || count > MAX_PREVIEW_COUNT {
            return Err(crate::error::NbcronError::Config(format!(
                "display.preview_count must be between 1 and {MAX_PREVIEW_COUNT}, got {count}"
            )));
        }
        if self
            .display
            .time_zone
            .as_deref()
            .is_some_and(|tz| tz.trim().is_empty())
        {
            return Err(crate::error::NbcronError::Config(
                "display.time_zone must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.nbcron/nbcron.toml", home)
}
