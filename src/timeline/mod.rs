//! Timeline construction from body files.
//!
//! The pipeline is a single ingestion pass that folds every record into a
//! [`Timeline`], followed by one sorted output pass that writes the rows and
//! drives the optional period summary.
//!
//! ```no_run
//! use rs_mactime::config::TimelineSettings;
//! use rs_mactime::timeline::generate;
//! use rs_mactime::utils::names::NameLookup;
//! use rs_mactime::utils::summary::PeriodSummarizer;
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! # fn example() -> anyhow::Result<()> {
//! let settings = TimelineSettings::default();
//! let input = BufReader::new(File::open("/cases/host.body")?);
//! let mut out = std::io::stdout().lock();
//!
//! let stats = generate::<_, _, std::io::Sink>(
//!     &settings,
//!     NameLookup::new(),
//!     NameLookup::new(),
//!     input,
//!     &mut out,
//!     None,
//! )?;
//! eprintln!("{} rows", stats.emit.rows);
//! # Ok(())
//! # }
//! ```

/// Record folding into the ordered row map
pub mod aggregator;

/// Row output and the session header
pub mod emitter;

/// Date rendering for rows and summary buckets
pub mod format;

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::config::TimelineSettings;
use crate::utils::names::NameLookup;
use crate::utils::summary::PeriodSummarizer;

pub use aggregator::{IngestStats, Timeline};
pub use emitter::{session_timezone, write_session_header, write_timeline, EmitStats, SessionInfo};

/// Totals of a complete run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ingest: IngestStats,
    pub emit: EmitStats,
}

/// Read all of `input`, then write the sorted timeline to `out`.
///
/// When a summarizer is given it receives every emitted row and is flushed
/// before this returns; its title must already have been written.
pub fn generate<R: BufRead, W: Write, S: Write>(
    settings: &TimelineSettings,
    owners: NameLookup,
    groups: NameLookup,
    input: R,
    out: &mut W,
    summary: Option<&mut PeriodSummarizer<S>>,
) -> Result<RunStats> {
    let mut timeline = Timeline::new(settings.window, owners, groups);
    let ingest = timeline.ingest_reader(input)?;
    let emit = write_timeline(&timeline, settings, out, summary)?;
    Ok(RunStats { ingest, emit })
}
