//! Date rendering shared by the timeline rows and the period summary.

use crate::config::{civil_time_utc, DateStyle, DisplayZone, SummaryGranularity};
use crate::constants::{
    BLANK_DATE_WIDTH, BLANK_DATE_WIDTH_ISO8601, MONTH_NAMES, WEEKDAY_NAMES, ZERO_DATE,
    ZERO_DATE_ISO8601,
};
use crate::models::CivilTime;

/// Wall clock time of `timestamp` as the rows show it: ISO-8601 is always UTC,
/// the other styles use the display zone.
pub fn civil_time(timestamp: i64, style: DateStyle, zone: &DisplayZone) -> Option<CivilTime> {
    match style {
        DateStyle::Iso8601 => civil_time_utc(timestamp),
        DateStyle::Words | DateStyle::NumericMonth => zone.civil_time(timestamp),
    }
}

/// Row date for `timestamp`. Zero, and values chrono cannot place, render as
/// the all-zero sentinel of the style.
pub fn format_date(timestamp: i64, civil: Option<&CivilTime>, style: DateStyle) -> String {
    let civil = match civil {
        Some(civil) if timestamp != 0 => civil,
        _ => return zero_date(style).to_string(),
    };

    match style {
        DateStyle::Iso8601 => format!(
            "{}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            civil.year, civil.month, civil.day, civil.hour, civil.minute, civil.second
        ),
        DateStyle::Words => format!(
            "{} {} {:02} {} {:02}:{:02}:{:02}",
            weekday_name(civil),
            month_name(civil),
            civil.day,
            civil.year,
            civil.hour,
            civil.minute,
            civil.second
        ),
        DateStyle::NumericMonth => format!(
            "{} {:02} {:02} {} {:02}:{:02}:{:02}",
            weekday_name(civil),
            civil.month,
            civil.day,
            civil.year,
            civil.hour,
            civil.minute,
            civil.second
        ),
    }
}

pub fn zero_date(style: DateStyle) -> &'static str {
    match style {
        DateStyle::Iso8601 => ZERO_DATE_ISO8601,
        DateStyle::Words | DateStyle::NumericMonth => ZERO_DATE,
    }
}

/// Spaces printed in place of a date equal to the previous row's.
pub fn blank_date(style: DateStyle) -> String {
    let width = match style {
        DateStyle::Iso8601 => BLANK_DATE_WIDTH_ISO8601,
        DateStyle::Words | DateStyle::NumericMonth => BLANK_DATE_WIDTH,
    };
    " ".repeat(width)
}

/// Label of a summary bucket: `Www Mmm DD YYYY`, plus ` HH:00:00` when hourly.
pub fn summary_label(civil: &CivilTime, granularity: SummaryGranularity, numeric_month: bool) -> String {
    let mut label = if numeric_month {
        format!("{} {:02} {:02} {}", weekday_name(civil), civil.month, civil.day, civil.year)
    } else {
        format!("{} {} {:02} {}", weekday_name(civil), month_name(civil), civil.day, civil.year)
    };
    if granularity == SummaryGranularity::Hour {
        label.push_str(&format!(" {:02}:00:00", civil.hour));
    }
    label
}

fn weekday_name(civil: &CivilTime) -> &'static str {
    WEEKDAY_NAMES[civil.weekday as usize % WEEKDAY_NAMES.len()]
}

fn month_name(civil: &CivilTime) -> &'static str {
    MONTH_NAMES[(civil.month as usize + MONTH_NAMES.len() - 1) % MONTH_NAMES.len()]
}
