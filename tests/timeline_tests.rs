//! Integration tests for timeline generation.
//!
//! These tests feed complete body files through `generate` and check the
//! rendered rows exactly as an examiner would read them.

use std::fs;
use std::io::BufReader;
use anyhow::Result;
use tempfile::TempDir;

use rs_mactime::config::{
    DisplayZone, OutputFormat, TimelineOptions, TimelineSettings,
};
use rs_mactime::timeline::{generate, write_session_header, RunStats, SessionInfo};
use rs_mactime::utils::names::NameLookup;

/// Render `body` with the given options in UTC
fn render(body: &str, options: &TimelineOptions, window: Option<&str>) -> Result<(String, RunStats)> {
    let mut options = options.clone();
    options.timezone = Some("UTC".to_string());
    let settings = TimelineSettings::resolve(&options, window, None)?;

    let mut out = Vec::new();
    let stats = generate::<_, _, std::io::Sink>(
        &settings,
        NameLookup::new(),
        NameLookup::new(),
        body.as_bytes(),
        &mut out,
        None,
    )?;
    Ok((String::from_utf8(out)?, stats))
}

/// Unset birth time produces a sentinel row at epoch zero ahead of the real activity
#[test]
fn test_zero_birth_time_sorts_first() -> Result<()> {
    let body = "0|/bin/ls|12|r/rrwxr-xr-x|0|0|100|1000000000|1000000000|1000000000|0\n";
    let (text, stats) = render(body, &TimelineOptions::default(), None)?;

    assert_eq!(
        text,
        "Xxx Xxx 00 0000 00:00:00      100 ...b r/rrwxr-xr-x 0        0        12       /bin/ls\n\
         Sun Sep 09 2001 01:46:40      100 mac. r/rrwxr-xr-x 0        0        12       /bin/ls\n"
    );
    assert_eq!(stats.ingest.records, 1);
    assert_eq!(stats.emit.rows, 2);
    Ok(())
}

/// A start date drops the zero rows and anything older
#[test]
fn test_start_date_filters_rows() -> Result<()> {
    let body = "\
0|/old|1|r/rrw-r--r--|0|0|0|0|946684800|0|0
0|/new|2|r/rrw-r--r--|0|0|0|0|1577836800|0|0
";
    let (text, stats) = render(body, &TimelineOptions::default(), Some("2010-01-01"))?;

    assert_eq!(
        text,
        "Wed Jan 01 2020 00:00:00        0 m... r/rrw-r--r-- 0        0        2        /new\n"
    );
    assert_eq!(stats.ingest.outside_window, 1);
    Ok(())
}

/// The end of a range is exclusive
#[test]
fn test_range_end_is_exclusive() -> Result<()> {
    let body = "\
0|/at-end|1|r/rrw-r--r--|0|0|0|0|1577923200|0|0
0|/inside|2|r/rrw-r--r--|0|0|0|0|1577923199|0|0
";
    let (text, _) = render(body, &TimelineOptions::default(), Some("2020-01-01..2020-01-02"))?;

    assert_eq!(text.lines().count(), 1);
    assert!(text.ends_with("/inside\n"));
    Ok(())
}

#[test]
fn test_invalid_window_is_rejected() {
    let options = TimelineOptions::default();
    let err = TimelineSettings::resolve(&options, Some("2020-13-45"), None).unwrap_err();
    assert!(err.to_string().contains("Invalid Date"));

    let err = TimelineSettings::resolve(&options, Some("yesterday"), None).unwrap_err();
    assert!(err.to_string().contains("yesterday"));
}

/// Same second, same inode: different names stay separate rows ordered by name
#[test]
fn test_hard_links_get_separate_rows() -> Result<()> {
    let body = "\
0|/usr/bin/vi|40|r/rrwxr-xr-x|0|0|0|0|1577836800|0|0
0|/usr/bin/ex|40|r/rrwxr-xr-x|0|0|0|0|1577836800|0|0
";
    let options = TimelineOptions::default();
    let (text, _) = render(body, &options, Some("2020-01-01"))?;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("/usr/bin/ex"));
    assert!(lines[1].ends_with("/usr/bin/vi"));
    // second row repeats the date and is blanked
    assert!(lines[1].starts_with(&" ".repeat(24)));
    Ok(())
}

/// Delimited output keeps the date on every row and quotes names
#[test]
fn test_delimited_output() -> Result<()> {
    let body = "\
0|/tmp/a%7Cb|7|r/rrw-r--r--|0|0|5|1577836800|1577836800|0|0
0|/tmp/say \"hi\"|8|r/rrw-r--r--|0|0|6|0|1577836800|0|0
";
    let options = TimelineOptions {
        output_format: OutputFormat::Delimited,
        ..Default::default()
    };
    let (text, _) = render(body, &options, Some("2020-01-01"))?;

    assert_eq!(
        text,
        "Date,Size,Type,Mode,UID,GID,Meta,File Name\n\
         Wed Jan 01 2020 00:00:00,5,ma..,r/rrw-r--r--,0,0,7,\"/tmp/a|b\"\n\
         Wed Jan 01 2020 00:00:00,6,m...,r/rrw-r--r--,0,0,8,\"/tmp/say \"\"hi\"\"\"\n"
    );
    Ok(())
}

#[test]
fn test_iso8601_ignores_display_zone() -> Result<()> {
    let body = "0|/etc/hosts|3|r/rrw-r--r--|0|0|0|0|1000000000|0|0\n";
    let options = TimelineOptions {
        iso8601: true,
        timezone: Some("Asia/Tokyo".to_string()),
        ..Default::default()
    };
    let settings = TimelineSettings::resolve(&options, Some("2001-01-01"), None)?;

    let mut out = Vec::new();
    generate::<_, _, std::io::Sink>(&settings, NameLookup::new(), NameLookup::new(), body.as_bytes(), &mut out, None)?;

    assert_eq!(
        String::from_utf8(out)?,
        "2001-09-09T01:46:40Z        0 m... r/rrw-r--r-- 0        0        3        /etc/hosts\n"
    );
    Ok(())
}

#[test]
fn test_display_zone_shifts_dates() -> Result<()> {
    let body = "0|/etc/hosts|3|r/rrw-r--r--|0|0|0|0|1000000000|0|0\n";
    let options = TimelineOptions {
        numeric_month: true,
        timezone: Some("Asia/Tokyo".to_string()),
        ..Default::default()
    };
    let settings = TimelineSettings::resolve(&options, Some("2001-01-01"), None)?;
    assert_eq!(settings.zone, DisplayZone::parse("Asia/Tokyo")?);

    let mut out = Vec::new();
    generate::<_, _, std::io::Sink>(&settings, NameLookup::new(), NameLookup::new(), body.as_bytes(), &mut out, None)?;

    assert!(String::from_utf8(out)?.starts_with("Sun 09 09 2001 10:46:40 "));
    Ok(())
}

/// Owner and group columns come from passwd and group files
#[test]
fn test_owner_and_group_names_from_files() -> Result<()> {
    let dir = TempDir::new()?;
    let passwd = dir.path().join("passwd");
    let group = dir.path().join("group");
    fs::write(&passwd, "root:x:0:0:root:/root:/bin/bash\n+::::::\nalice:x:1000:1000::/home/alice:/bin/sh\n")?;
    fs::write(&group, "wheel:x:0:root\nstaff:x:0:\n")?;
    let body_path = dir.path().join("host.body");
    fs::write(&body_path, "0|/home/alice/notes|77|r/rrw-------|1000|0|9|0|1577836800|0|0\n")?;

    let owners = NameLookup::from_file(&passwd)?;
    let groups = NameLookup::from_file(&group)?;
    let settings = TimelineSettings {
        zone: DisplayZone::utc(),
        ..TimelineSettings::resolve(&TimelineOptions::default(), Some("2020-01-01"), None)?
    };

    let mut out = Vec::new();
    let input = BufReader::new(fs::File::open(&body_path)?);
    generate::<_, _, std::io::Sink>(&settings, owners, groups, input, &mut out, None)?;

    assert_eq!(
        String::from_utf8(out)?,
        "Wed Jan 01 2020 00:00:00        9 m... r/rrw------- alice    wheel/staff 77       /home/alice/notes\n"
    );
    Ok(())
}

#[test]
fn test_missing_name_file_is_fatal() {
    let err = NameLookup::from_file(std::path::Path::new("/nonexistent/etc/passwd")).unwrap_err();
    assert!(err.to_string().starts_with("Can't open"));
}

/// Garbage lines are skipped without stopping the run
#[test]
fn test_noisy_body_file() -> Result<()> {
    let body = "\
# comment line

not|enough|fields
0|/bad-size|1|r/rrw-r--r--|0|0|big|0|1577836800|0|0
0|/no-times|2|r/rrw-r--r--|0|0|0|0|0|0|0
0|/good|3|r/rrw-r--r--|0|0|0|0|1577836800|0|0
";
    let (text, stats) = render(body, &TimelineOptions::default(), Some("2020-01-01"))?;

    assert_eq!(stats.ingest.records, 1);
    assert_eq!(stats.ingest.skipped, 5);
    assert!(text.ends_with("/good\n"));
    assert_eq!(text.lines().count(), 1);
    Ok(())
}

#[test]
fn test_session_header() -> Result<()> {
    let info = SessionInfo {
        source: "STDIN".to_string(),
        window_arg: Some("2020-01-01".to_string()),
        timezone: Some("UTC".to_string()),
        passwd_file: Some("etc/passwd".to_string()),
        group_file: None,
    };
    let mut out = Vec::new();
    write_session_header(&mut out, &info)?;

    assert_eq!(
        String::from_utf8(out)?,
        "The Sleuth Kit mactime Timeline\n\
         Input Source: STDIN\n\
         Time: 2020-01-01\t\tTimezone: UTC\n\
         passwd File: etc/passwd\n\
         \n"
    );
    Ok(())
}
