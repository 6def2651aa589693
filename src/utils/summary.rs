use std::io::Write;

use anyhow::{Context, Result};
use log::debug;

use crate::config::SummaryGranularity;
use crate::models::CivilTime;
use crate::timeline::format::summary_label;

/// Write the index title: `<Daily|Hourly> Summary for Timeline of <source>` and a blank line.
pub fn write_index_title<W: Write>(out: &mut W, granularity: SummaryGranularity, source: &str) -> Result<()> {
    writeln!(out, "{} Summary for Timeline of {}", granularity.label(), source)
        .and_then(|_| writeln!(out))
        .context("Failed to write summary index title")
}

#[derive(Debug, Clone, Copy)]
struct OpenBucket {
    civil: CivilTime,
    /// Epoch value of the first row in the bucket
    representative: i64,
    count: usize,
}

/// Totals reported once the summary is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryStats {
    pub buckets_written: usize,
    pub rows_counted: usize,
}

/// Counts timeline rows per day or hour while the emitter walks the sorted
/// timeline, writing one index line each time the bucket changes.
///
/// Rows must be observed in time order; nothing is re-sorted here.
pub struct PeriodSummarizer<W: Write> {
    out: W,
    granularity: SummaryGranularity,
    numeric_month: bool,
    delimiter: char,
    bucket: Option<OpenBucket>,
    stats: SummaryStats,
}

impl<W: Write> PeriodSummarizer<W> {
    pub fn new(out: W, granularity: SummaryGranularity, numeric_month: bool, delimiter: char) -> Self {
        Self {
            out,
            granularity,
            numeric_month,
            delimiter,
            bucket: None,
            stats: SummaryStats::default(),
        }
    }

    /// Count one emitted row.
    pub fn observe(&mut self, timestamp: i64, civil: &CivilTime) -> Result<()> {
        match self.bucket.as_mut() {
            Some(open) if same_bucket(&open.civil, civil, self.granularity) => {
                open.count += 1;
            }
            _ => {
                self.flush()?;
                self.bucket = Some(OpenBucket {
                    civil: *civil,
                    representative: timestamp,
                    count: 1,
                });
            }
        }
        Ok(())
    }

    /// Flush the open bucket and the underlying writer.
    pub fn finish(&mut self) -> Result<SummaryStats> {
        self.flush()?;
        self.out.flush().context("Failed to flush summary index")?;
        debug!(
            "{} summary: {} buckets, {} rows",
            self.granularity.label(),
            self.stats.buckets_written,
            self.stats.rows_counted
        );
        Ok(self.stats)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush(&mut self) -> Result<()> {
        let Some(open) = self.bucket.take() else {
            return Ok(());
        };
        // Buckets opened by an unset (zero) time are not reported
        if open.count == 0 || open.representative <= 0 {
            return Ok(());
        }

        let label = summary_label(&open.civil, self.granularity, self.numeric_month);
        writeln!(self.out, "{}{} {}", label, self.delimiter, open.count)
            .context("Failed to write summary index record")?;
        self.stats.buckets_written += 1;
        self.stats.rows_counted += open.count;
        Ok(())
    }
}

fn same_bucket(open: &CivilTime, civil: &CivilTime, granularity: SummaryGranularity) -> bool {
    let same_day = (open.day, open.weekday, open.month, open.year)
        == (civil.day, civil.weekday, civil.month, civil.year);
    match granularity {
        SummaryGranularity::Day => same_day,
        SummaryGranularity::Hour => same_day && open.hour == civil.hour,
    }
}
