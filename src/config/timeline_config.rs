use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::window::TimeWindow;
use crate::config::zone::DisplayZone;
use crate::constants::{ERROR_INVALID_INDEX_TYPE, INDEX_DELIMITER_COLUMNS, INDEX_DELIMITER_DELIMITED};

/// Layout of the timeline rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed columns for reading in a terminal
    #[default]
    Columns,
    /// Comma delimited with quoted file names
    Delimited,
}

impl OutputFormat {
    /// Separator between label and count in the summary index
    pub fn index_delimiter(self) -> char {
        match self {
            OutputFormat::Columns => INDEX_DELIMITER_COLUMNS,
            OutputFormat::Delimited => INDEX_DELIMITER_DELIMITED,
        }
    }
}

/// How row dates are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `Sun Sep 09 2001 01:46:40`
    #[default]
    Words,
    /// `Sun 09 09 2001 01:46:40`
    NumericMonth,
    /// `2001-09-09T01:46:40Z`, always UTC
    Iso8601,
}

/// Bucket size of the period summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryGranularity {
    Day,
    Hour,
}

impl SummaryGranularity {
    pub fn label(self) -> &'static str {
        match self {
            SummaryGranularity::Day => "Daily",
            SummaryGranularity::Hour => "Hourly",
        }
    }
}

impl FromStr for SummaryGranularity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "day" => Ok(SummaryGranularity::Day),
            "hour" => Ok(SummaryGranularity::Hour),
            _ => Err(anyhow!(ERROR_INVALID_INDEX_TYPE)),
        }
    }
}

impl fmt::Display for SummaryGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryGranularity::Day => write!(f, "day"),
            SummaryGranularity::Hour => write!(f, "hour"),
        }
    }
}

/// Option defaults that can be kept in a YAML file and overridden by flags.
///
/// ```yaml
/// output_format: delimited
/// iso8601: false
/// numeric_month: true
/// timezone: Europe/Berlin
/// header: true
/// passwd_file: evidence/etc/passwd
/// group_file: evidence/etc/group
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineOptions {
    pub output_format: OutputFormat,
    pub iso8601: bool,
    pub numeric_month: bool,
    pub timezone: Option<String>,
    pub header: bool,
    pub passwd_file: Option<PathBuf>,
    pub group_file: Option<PathBuf>,
}

impl TimelineOptions {
    /// Load options from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let options: TimelineOptions = serde_yaml::from_str(&content)
            .context(format!("Failed to parse YAML config: {}", path.display()))?;

        debug!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a YAML file
    pub fn save_to_yaml_file(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .context("Failed to serialize options to YAML")?;

        fs::write(path, yaml)
            .context(format!("Failed to write config to {}", path.display()))?;

        info!("Saved options to {}", path.display());
        Ok(())
    }

    /// ISO-8601 wins over numeric months, as in mactime.
    pub fn date_style(&self) -> DateStyle {
        if self.iso8601 {
            DateStyle::Iso8601
        } else if self.numeric_month {
            DateStyle::NumericMonth
        } else {
            DateStyle::Words
        }
    }
}

/// Load options from `config_path`, or the defaults when no file is given.
pub fn load_options(config_path: Option<&Path>) -> Result<TimelineOptions> {
    match config_path {
        Some(path) => TimelineOptions::from_yaml_file(path),
        None => {
            debug!("No config path provided, using default options");
            Ok(TimelineOptions::default())
        }
    }
}

/// Resolved settings for one timeline run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineSettings {
    pub output_format: OutputFormat,
    pub date_style: DateStyle,
    /// Month as number in summary lines, independent of the row date style
    pub numeric_month: bool,
    pub zone: DisplayZone,
    pub window: TimeWindow,
    pub summary: Option<SummaryGranularity>,
}

impl TimelineSettings {
    /// Resolve zone and window from the option set. `window` is the raw
    /// `[DATE]` argument, parsed in the resolved zone.
    pub fn resolve(
        options: &TimelineOptions,
        window: Option<&str>,
        summary: Option<SummaryGranularity>,
    ) -> Result<Self> {
        let zone = DisplayZone::from_option(options.timezone.as_deref())?;
        let window = match window {
            Some(arg) => TimeWindow::parse(arg, &zone)?,
            None => TimeWindow::all_time(),
        };

        Ok(Self {
            output_format: options.output_format,
            date_style: options.date_style(),
            numeric_month: options.numeric_month,
            zone,
            window,
            summary,
        })
    }
}
