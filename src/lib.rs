//! # rs-mactime
//!
//! A mactime-compatible timeline generator for Digital Forensics and Incident
//! Response (DFIR) work, written in Rust.
//!
//! ## Overview
//!
//! rs-mactime reads body files (as produced by `fls -m`, `ils -m` or mac-robber)
//! and turns the modify, access, change and birth ("MACB") times
//! of every file into a single chronological timeline. Optionally the timeline
//! is restricted to a date window and accompanied by a daily or hourly
//! activity summary.
//!
//! ## Features
//!
//! - **Body file parsing**: tolerant of noisy input, `%XX` escapes decoded byte-wise
//! - **MACB aggregation**: one row per (time, metadata address, file name)
//! - **Output formats**: fixed columns or comma delimited
//! - **Date styles**: weekday/month words, numeric month, or ISO-8601 UTC
//! - **Time zones**: any IANA zone via `-z`
//! - **Summaries**: daily or hourly row counts in a separate index file
//!
//! ## Usage
//!
//! ```
//! use rs_mactime::config::{DisplayZone, TimelineSettings};
//! use rs_mactime::timeline::generate;
//! use rs_mactime::utils::names::NameLookup;
//!
//! # fn main() -> anyhow::Result<()> {
//! let body = "0|/etc/passwd|5|r/rrw-r--r--|0|0|1024|1000000000|1000000000|1000000000|1000000000\n";
//! let settings = TimelineSettings { zone: DisplayZone::utc(), ..Default::default() };
//!
//! let mut out = Vec::new();
//! generate::<_, _, std::io::Sink>(&settings, NameLookup::new(), NameLookup::new(), body.as_bytes(), &mut out, None)?;
//!
//! assert_eq!(
//!     String::from_utf8(out)?,
//!     "Sun Sep 09 2001 01:46:40     1024 macb r/rrw-r--r-- 0        0        5        /etc/passwd\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: Core data models (records, keys, MACB flags)
//! - [`config`]: Run options, time windows and display zones
//! - [`timeline`]: Aggregation and output of the timeline
//! - [`utils`]: Body file parsing, name lookups and the period summary
//! - [`constants`]: Output format constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models and structures used throughout the application
pub mod models;

/// Run options, time windows and display zones
pub mod config;

/// Timeline aggregation and output
pub mod timeline;

/// Body file parsing, name lookups and summaries
pub mod utils;

/// Application constants and output format strings
pub mod constants;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
