use std::fmt;
use std::io::Write;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::constants::{ZONE_LIST_RULE, ZONE_LIST_TITLE};
use crate::models::CivilTime;

/// Zone used to turn epoch seconds into wall clock dates and to interpret
/// window dates given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// Zone of the machine running the tool
    #[default]
    Local,
    /// An IANA zone chosen with `-z`
    Named(Tz),
}

impl DisplayZone {
    pub fn utc() -> Self {
        DisplayZone::Named(chrono_tz::UTC)
    }

    /// Resolve an IANA zone name such as `Europe/Berlin`.
    pub fn parse(name: &str) -> Result<Self> {
        name.parse::<Tz>()
            .map(DisplayZone::Named)
            .map_err(|_| anyhow!("Invalid timezone provided: {}. Use '-z list' to list valid timezones.", name))
    }

    pub fn from_option(name: Option<&str>) -> Result<Self> {
        match name {
            Some(name) => Self::parse(name),
            None => Ok(DisplayZone::Local),
        }
    }

    /// Wall clock time of `timestamp`, `None` when chrono cannot represent it.
    pub fn civil_time(&self, timestamp: i64) -> Option<CivilTime> {
        match self {
            DisplayZone::Local => civil_in(&Local, timestamp),
            DisplayZone::Named(tz) => civil_in(tz, timestamp),
        }
    }

    /// Epoch seconds of a wall clock time in this zone. Ambiguous times
    /// resolve to the earlier instant, nonexistent ones to `None`.
    pub fn resolve(&self, naive: &NaiveDateTime) -> Option<i64> {
        match self {
            DisplayZone::Local => Local.from_local_datetime(naive).earliest().map(|dt| dt.timestamp()),
            DisplayZone::Named(tz) => tz.from_local_datetime(naive).earliest().map(|dt| dt.timestamp()),
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        match self {
            DisplayZone::Local => None,
            DisplayZone::Named(tz) => Some(tz.name()),
        }
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Local => write!(f, "local"),
            DisplayZone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

/// Civil time in UTC, used by the ISO-8601 date style regardless of `-z`.
pub fn civil_time_utc(timestamp: i64) -> Option<CivilTime> {
    civil_in(&chrono::Utc, timestamp)
}

fn civil_in<Z: TimeZone>(zone: &Z, timestamp: i64) -> Option<CivilTime> {
    zone.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| CivilTime::from_datetime(&dt))
}

/// All zone names accepted by `-z`, sorted.
pub fn zone_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
    names.sort_unstable();
    names
}

/// Write the `-z list` banner followed by one zone name per line.
pub fn write_zone_list<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)
        .and_then(|_| writeln!(out, "{}", ZONE_LIST_RULE))
        .and_then(|_| writeln!(out, "{}", ZONE_LIST_TITLE))
        .and_then(|_| writeln!(out, "{}", ZONE_LIST_RULE))
        .context("Failed to write zone list")?;
    for name in zone_names() {
        writeln!(out, "{}", name).context("Failed to write zone list")?;
    }
    Ok(())
}
