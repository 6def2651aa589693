use std::fmt;

use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::constants::{BODYFILE_COMMENT, BODYFILE_DELIMITER, BODYFILE_MIN_FIELDS};
use crate::models::{MacbTimes, MetadataRecord};
use crate::utils::escape::decode_field;

lazy_static! {
    static ref META_ADDRESS_PATTERN: Regex = Regex::new(r"^[0-9-]+$").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Why a body file line did not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    Blank,
    Comment,
    TooFewFields(usize),
    InvalidField(&'static str),
    NoTimestamps,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Blank => write!(f, "blank line"),
            SkipReason::Comment => write!(f, "comment"),
            SkipReason::TooFewFields(n) => {
                write!(f, "only {} fields, need {}", n, BODYFILE_MIN_FIELDS)
            }
            SkipReason::InvalidField(name) => write!(f, "invalid {} field", name),
            SkipReason::NoTimestamps => write!(f, "no time information"),
        }
    }
}

/// Result of parsing one body file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Record(MetadataRecord),
    Skip(SkipReason),
}

/// Parse a single body file (version 3) line.
///
/// Layout: `MD5|name|inode|mode_as_string|UID|GID|size|atime|mtime|ctime|crtime`.
/// Surrounding whitespace is trimmed, every field is percent-decoded and the
/// numeric columns are validated. Anything unusable is reported as a
/// [`SkipReason`] instead of an error, because real body files are noisy.
pub fn parse_line(line: &[u8]) -> LineOutcome {
    let line = line.trim_ascii();
    if line.is_empty() {
        return LineOutcome::Skip(SkipReason::Blank);
    }
    if line[0] == BODYFILE_COMMENT {
        return LineOutcome::Skip(SkipReason::Comment);
    }

    let fields: Vec<&[u8]> = line.split(|b| *b == BODYFILE_DELIMITER).collect();
    if fields.len() < BODYFILE_MIN_FIELDS {
        return LineOutcome::Skip(SkipReason::TooFewFields(fields.len()));
    }

    match build_record(&fields) {
        Ok(record) => LineOutcome::Record(record),
        Err(reason) => LineOutcome::Skip(reason),
    }
}

fn build_record(fields: &[&[u8]]) -> Result<MetadataRecord, SkipReason> {
    let name = decode_field(fields[1]).into_owned();
    let meta_address = matching_text(fields[2], &META_ADDRESS_PATTERN, "meta address")?;
    let mode = String::from_utf8_lossy(&decode_field(fields[3])).into_owned();
    let uid = matching_text(fields[4], &NUMBER_PATTERN, "uid")?;
    let gid = matching_text(fields[5], &NUMBER_PATTERN, "gid")?;
    let size = number(fields[6], "size")?;

    let times = MacbTimes {
        accessed: number(fields[7], "atime")?,
        modified: number(fields[8], "mtime")?,
        changed: number(fields[9], "ctime")?,
        born: number(fields[10], "crtime")?,
    };
    if !times.any_set() {
        return Err(SkipReason::NoTimestamps);
    }

    Ok(MetadataRecord {
        name,
        meta_address,
        mode,
        uid,
        gid,
        size,
        times,
    })
}

/// Decode a field and require it to match `pattern`; the match guarantees ASCII.
fn matching_text(raw: &[u8], pattern: &Regex, field: &'static str) -> Result<String, SkipReason> {
    let decoded = decode_field(raw);
    if !pattern.is_match(&decoded) {
        return Err(SkipReason::InvalidField(field));
    }
    String::from_utf8(decoded.into_owned()).map_err(|_| SkipReason::InvalidField(field))
}

fn number<T: std::str::FromStr>(raw: &[u8], field: &'static str) -> Result<T, SkipReason> {
    matching_text(raw, &NUMBER_PATTERN, field)?
        .parse::<T>()
        .map_err(|_| SkipReason::InvalidField(field))
}
