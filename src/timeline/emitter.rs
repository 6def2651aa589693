use std::io::Write;

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::config::{DisplayZone, OutputFormat, TimelineSettings};
use crate::constants::{DELIMITED_HEADER, SESSION_HEADER_TITLE};
use crate::models::{AggregationKey, FileDescriptor, MacbFlags};
use crate::timeline::aggregator::Timeline;
use crate::timeline::format::{blank_date, civil_time, format_date};
use crate::utils::summary::PeriodSummarizer;

/// What the optional session header reports about the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInfo {
    /// Body file path, or `STDIN`
    pub source: String,
    /// The raw `[DATE]` argument
    pub window_arg: Option<String>,
    pub timezone: Option<String>,
    pub passwd_file: Option<String>,
    pub group_file: Option<String>,
}

/// Zone named in the session header: the `-z` zone, otherwise the value of
/// `TZ` from the environment (`env_tz`) when it is set and not empty.
pub fn session_timezone(zone: &DisplayZone, env_tz: Option<String>) -> Option<String> {
    match zone.name() {
        Some(name) => Some(name.to_string()),
        None => env_tz.filter(|tz| !tz.is_empty()),
    }
}

/// Write the `-h` session header block.
pub fn write_session_header<W: Write>(out: &mut W, info: &SessionInfo) -> Result<()> {
    writeln!(out, "{}", SESSION_HEADER_TITLE)?;
    writeln!(out, "Input Source: {}", info.source)?;

    if let Some(window) = &info.window_arg {
        write!(out, "Time: {}\t\t", window)?;
    }
    match &info.timezone {
        Some(zone) => writeln!(out, "Timezone: {}", zone)?,
        None => writeln!(out)?,
    }

    let files: Vec<String> = [
        info.passwd_file.as_ref().map(|path| format!("passwd File: {}", path)),
        info.group_file.as_ref().map(|path| format!("group File: {}", path)),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !files.is_empty() {
        writeln!(out, "{}", files.join("\t"))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Totals of one emission pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitStats {
    pub rows: usize,
    /// Columnar rows whose date was blanked because it repeated
    pub repeated_dates: usize,
}

/// Write every timeline row in key order, feeding the summarizer from the same pass.
///
/// In columnar output a date equal to the previous row's date is replaced by
/// blanks; delimited rows always carry the date. The summarizer is finished
/// (flushed) before returning.
pub fn write_timeline<W: Write, S: Write>(
    timeline: &Timeline,
    settings: &TimelineSettings,
    out: &mut W,
    mut summary: Option<&mut PeriodSummarizer<S>>,
) -> Result<EmitStats> {
    let mut stats = EmitStats::default();
    let mut previous_date = String::new();

    if settings.output_format == OutputFormat::Delimited {
        writeln!(out, "{}", DELIMITED_HEADER).context("Failed to write timeline header")?;
    }

    for (key, flags) in timeline.entries() {
        let civil = civil_time(key.time, settings.date_style, &settings.zone);
        let date = format_date(key.time, civil.as_ref(), settings.date_style);

        let repeated = date == previous_date;
        if !repeated {
            previous_date.clone_from(&date);
        }

        if let (Some(summarizer), Some(civil)) = (summary.as_deref_mut(), civil.as_ref()) {
            summarizer.observe(key.time, civil)?;
        }

        let descriptor = timeline
            .descriptor(&key.name)
            .ok_or_else(|| anyhow!("No file details recorded for {}", String::from_utf8_lossy(&key.name)))?;

        let written = match settings.output_format {
            OutputFormat::Columns => {
                let shown = if repeated {
                    stats.repeated_dates += 1;
                    blank_date(settings.date_style)
                } else {
                    date
                };
                write_column_row(out, &shown, key, flags, descriptor)
            }
            OutputFormat::Delimited => write_delimited_row(out, &date, key, flags, descriptor),
        };
        written.context("Failed to write timeline row")?;
        stats.rows += 1;
    }

    if let Some(summarizer) = summary {
        summarizer.finish()?;
    }
    out.flush().context("Failed to flush timeline output")?;

    debug!("Wrote {} timeline rows ({} with repeated dates)", stats.rows, stats.repeated_dates);
    Ok(stats)
}

fn write_column_row<W: Write>(
    out: &mut W,
    date: &str,
    key: &AggregationKey,
    flags: &MacbFlags,
    descriptor: &FileDescriptor,
) -> std::io::Result<()> {
    write!(
        out,
        "{} {:>8} {:3} {} {:<8} {:<8} {:<8} ",
        date, descriptor.size, flags, descriptor.mode, descriptor.owner, descriptor.group, key.meta_address
    )?;
    out.write_all(&key.name)?;
    out.write_all(b"\n")
}

fn write_delimited_row<W: Write>(
    out: &mut W,
    date: &str,
    key: &AggregationKey,
    flags: &MacbFlags,
    descriptor: &FileDescriptor,
) -> std::io::Result<()> {
    write!(
        out,
        "{},{},{},{},{},{},{},\"",
        date, descriptor.size, flags, descriptor.mode, descriptor.owner, descriptor.group, key.meta_address
    )?;
    out.write_all(&quote_escaped(&key.name))?;
    out.write_all(b"\"\n")
}

/// Double every `"` so the name can sit inside a quoted field.
fn quote_escaped(name: &[u8]) -> Vec<u8> {
    let mut escaped = Vec::with_capacity(name.len());
    for byte in name {
        if *byte == b'"' {
            escaped.push(b'"');
        }
        escaped.push(*byte);
    }
    escaped
}
