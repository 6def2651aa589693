//! Building blocks shared by the timeline pipeline.
//!
//! ## Components
//!
//! - **Escape**: `%XX` decoding of body file fields
//! - **Bodyfile**: parsing and validation of body file lines
//! - **Names**: uid/gid to display name tables (passwd and group files)
//! - **Summary**: daily or hourly row counts written to the index file
//!
//! ## Common Use Cases
//!
//! ### Parsing a Body File Line
//!
//! ```
//! use rs_mactime::utils::bodyfile::{parse_line, LineOutcome};
//!
//! let line = b"0|/etc/passwd|5|r/rrw-r--r--|0|0|1024|1000000000|1000000000|1000000000|0";
//! match parse_line(line) {
//!     LineOutcome::Record(record) => assert_eq!(record.size, 1024),
//!     LineOutcome::Skip(reason) => panic!("skipped: {}", reason),
//! }
//! ```
//!
//! ### Resolving Owner Names
//!
//! ```no_run
//! use rs_mactime::utils::names::NameLookup;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let owners = NameLookup::from_file(Path::new("/mnt/evidence/etc/passwd"))?;
//! println!("uid 0 is {}", owners.display("0"));
//! # Ok(())
//! # }
//! ```

/// Percent-escape decoding
pub mod escape;

/// Body file line parsing
pub mod bodyfile;

/// Owner and group name lookup tables
pub mod names;

/// Daily and hourly summary index
pub mod summary;
