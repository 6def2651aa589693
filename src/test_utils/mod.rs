//! Test utilities for rs-mactime
//!
//! Helpers for building body file lines, records and settings in unit tests.

#![cfg(test)]

use anyhow::Result;
use tempfile::NamedTempFile;

use crate::config::{DisplayZone, TimelineSettings};
use crate::models::{MacbTimes, MetadataRecord};

/// Creates a temporary file with the given content
pub fn create_temp_file(content: &[u8]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    use std::io::Write;
    file.write_all(content)?;
    file.flush()?;
    Ok(file)
}

/// Body file line with fixed mode, ids and size.
/// Times are given in body file column order: atime, mtime, ctime, crtime.
pub fn body_line(name: &str, meta: &str, atime: i64, mtime: i64, ctime: i64, crtime: i64) -> String {
    format!(
        "0|{}|{}|r/rrw-r--r--|0|0|0|{}|{}|{}|{}",
        name, meta, atime, mtime, ctime, crtime
    )
}

/// Record owned by uid 0 / gid 0 with an empty size
pub fn record(name: &str, meta: &str, times: MacbTimes) -> MetadataRecord {
    MetadataRecord {
        name: name.as_bytes().to_vec(),
        meta_address: meta.to_string(),
        mode: "r/rrw-r--r--".to_string(),
        uid: "0".to_string(),
        gid: "0".to_string(),
        size: 0,
        times,
    }
}

/// Default settings rendered in UTC so expectations do not depend on the host zone
pub fn utc_settings() -> TimelineSettings {
    TimelineSettings {
        zone: DisplayZone::utc(),
        ..Default::default()
    }
}
