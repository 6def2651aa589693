use anyhow::{bail, Result};
use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::zone::DisplayZone;
use crate::constants::ERROR_INVALID_DATE;
use crate::models::MacbTimes;

lazy_static! {
    static ref DATE_PATTERN: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    static ref DATE_TIME_PATTERN: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}$").unwrap();
}

/// Range of epoch seconds admitted into the timeline: `start <= t < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeWindow {
    pub start: i64,
    /// No upper bound when `None`
    pub end: Option<i64>,
}

impl TimeWindow {
    pub fn all_time() -> Self {
        Self::default()
    }

    pub fn new(start: i64, end: Option<i64>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: i64) -> bool {
        time >= self.start && self.end.map_or(true, |end| time < end)
    }

    /// True when every role time lies before the window start.
    pub fn entirely_before(&self, times: &MacbTimes) -> bool {
        times.iter().all(|(_, time)| time < self.start)
    }

    /// Parse `DATE` or `DATE..DATE`, each side `yyyy-mm-dd` or
    /// `yyyy-mm-ddThh:mm:ss`, interpreted in `zone`. The end may be left empty.
    pub fn parse(arg: &str, zone: &DisplayZone) -> Result<Self> {
        let (start, end) = match arg.split_once("..") {
            Some((start, end)) => (start, end),
            None => (arg, ""),
        };

        let start = parse_window_date(start, zone)?;
        let end = if end.is_empty() {
            None
        } else {
            Some(parse_window_date(end, zone)?)
        };
        Ok(Self { start, end })
    }
}

/// Epoch seconds for one window date. Dates before the epoch are rejected.
pub fn parse_window_date(value: &str, zone: &DisplayZone) -> Result<i64> {
    let naive = if DATE_PATTERN.is_match(value) {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    } else if DATE_TIME_PATTERN.is_match(value) {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok()
    } else {
        None
    };

    match naive.and_then(|naive| zone.resolve(&naive)) {
        Some(seconds) if seconds >= 0 => Ok(seconds),
        _ => bail!("{}: {}", ERROR_INVALID_DATE, value),
    }
}
