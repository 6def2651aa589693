//! Integration tests for the daily and hourly summary index.

use anyhow::Result;
use std::fs;
use std::io::BufWriter;
use tempfile::TempDir;

use rs_mactime::config::{OutputFormat, SummaryGranularity, TimelineOptions, TimelineSettings};
use rs_mactime::timeline::generate;
use rs_mactime::utils::names::NameLookup;
use rs_mactime::utils::summary::{write_index_title, PeriodSummarizer};

// 2020-01-01 10:05, 10:40 and 11:02 UTC
const BODY: &str = "\
0|/var/log/a|1|r/rrw-r--r--|0|0|0|0|1577873100|0|0
0|/var/log/b|2|r/rrw-r--r--|0|0|0|0|1577875200|0|0
0|/var/log/c|3|r/rrw-r--r--|0|0|0|0|1577876520|0|0
";

fn run_with_index(
    options: TimelineOptions,
    granularity: SummaryGranularity,
    window: Option<&str>,
) -> Result<(String, String)> {
    let settings = TimelineSettings::resolve(&options, window, Some(granularity))?;

    let mut index = Vec::new();
    write_index_title(&mut index, granularity, "STDIN")?;
    let mut summarizer = PeriodSummarizer::new(
        index,
        granularity,
        settings.numeric_month,
        settings.output_format.index_delimiter(),
    );

    let mut out = Vec::new();
    generate(
        &settings,
        NameLookup::new(),
        NameLookup::new(),
        BODY.as_bytes(),
        &mut out,
        Some(&mut summarizer),
    )?;

    Ok((String::from_utf8(out)?, String::from_utf8(summarizer.into_inner())?))
}

fn utc_options() -> TimelineOptions {
    TimelineOptions {
        timezone: Some("UTC".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_hourly_index() -> Result<()> {
    let (timeline, index) = run_with_index(utc_options(), SummaryGranularity::Hour, Some("2020-01-01"))?;

    assert_eq!(timeline.lines().count(), 3);
    assert_eq!(
        index,
        "Hourly Summary for Timeline of STDIN\n\
         \n\
         Wed Jan 01 2020 10:00:00: 2\n\
         Wed Jan 01 2020 11:00:00: 1\n"
    );
    Ok(())
}

#[test]
fn test_daily_index_numeric_month() -> Result<()> {
    let options = TimelineOptions {
        numeric_month: true,
        ..utc_options()
    };
    let (_, index) = run_with_index(options, SummaryGranularity::Day, Some("2020-01-01"))?;

    assert_eq!(
        index,
        "Daily Summary for Timeline of STDIN\n\nWed 01 01 2020: 3\n"
    );
    Ok(())
}

#[test]
fn test_delimited_index_uses_comma() -> Result<()> {
    let options = TimelineOptions {
        output_format: OutputFormat::Delimited,
        ..utc_options()
    };
    let (_, index) = run_with_index(options, SummaryGranularity::Day, Some("2020-01-01"))?;

    assert!(index.ends_with("Wed Jan 01 2020, 3\n"));
    Ok(())
}

/// Rows at the unset (zero) time are printed but never summarized
#[test]
fn test_zero_time_rows_not_summarized() -> Result<()> {
    let (timeline, index) = run_with_index(utc_options(), SummaryGranularity::Day, None)?;

    assert!(timeline.starts_with("Xxx Xxx 00 0000 00:00:00"));
    assert_eq!(
        index,
        "Daily Summary for Timeline of STDIN\n\nWed Jan 01 2020: 3\n"
    );
    Ok(())
}

/// Bucket boundaries follow the display zone
#[test]
fn test_index_in_display_zone() -> Result<()> {
    let options = TimelineOptions {
        timezone: Some("America/New_York".to_string()),
        ..Default::default()
    };
    let (_, index) = run_with_index(options, SummaryGranularity::Hour, Some("2020-01-01"))?;

    assert!(index.contains("Wed Jan 01 2020 05:00:00: 2\n"));
    assert!(index.contains("Wed Jan 01 2020 06:00:00: 1\n"));
    Ok(())
}

/// The index is a plain file written through a buffered writer, as the binary does it
#[test]
fn test_index_file_on_disk() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("index.txt");
    let settings = TimelineSettings::resolve(&utc_options(), Some("2020-01-01"), Some(SummaryGranularity::Day))?;

    let mut writer = BufWriter::new(fs::File::create(&path)?);
    write_index_title(&mut writer, SummaryGranularity::Day, "/cases/host.body")?;
    let mut summarizer = PeriodSummarizer::new(writer, SummaryGranularity::Day, false, ':');

    let mut out = Vec::new();
    let stats = generate(
        &settings,
        NameLookup::new(),
        NameLookup::new(),
        BODY.as_bytes(),
        &mut out,
        Some(&mut summarizer),
    )?;
    drop(summarizer);

    assert_eq!(stats.emit.rows, 3);
    assert_eq!(
        fs::read_to_string(&path)?,
        "Daily Summary for Timeline of /cases/host.body\n\nWed Jan 01 2020: 3\n"
    );
    Ok(())
}
