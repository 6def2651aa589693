use std::fmt;

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::constants::MACB_PLACEHOLDER;

/// The four timestamp roles tracked for every file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacbRole {
    Modified,
    Accessed,
    Changed,
    Born,
}

impl MacbRole {
    /// Roles in MACB display order
    pub const ALL: [MacbRole; 4] = [
        MacbRole::Modified,
        MacbRole::Accessed,
        MacbRole::Changed,
        MacbRole::Born,
    ];

    pub fn letter(self) -> char {
        match self {
            MacbRole::Modified => 'm',
            MacbRole::Accessed => 'a',
            MacbRole::Changed => 'c',
            MacbRole::Born => 'b',
        }
    }

    fn bit(self) -> u8 {
        match self {
            MacbRole::Modified => 0b0001,
            MacbRole::Accessed => 0b0010,
            MacbRole::Changed => 0b0100,
            MacbRole::Born => 0b1000,
        }
    }
}

/// Set of roles that produced one timeline instant. Inserting a role twice is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MacbFlags(u8);

impl MacbFlags {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, role: MacbRole) {
        self.0 |= role.bit();
    }

    pub fn contains(&self, role: MacbRole) -> bool {
        self.0 & role.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl FromIterator<MacbRole> for MacbFlags {
    fn from_iter<I: IntoIterator<Item = MacbRole>>(iter: I) -> Self {
        let mut flags = MacbFlags::new();
        for role in iter {
            flags.insert(role);
        }
        flags
    }
}

/// Renders as the 4-character `macb` string, e.g. `mac.`
impl fmt::Display for MacbFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = MacbRole::ALL
            .iter()
            .map(|role| if self.contains(*role) { role.letter() } else { MACB_PLACEHOLDER })
            .collect();
        f.pad(&rendered)
    }
}

/// Epoch-second values of the four roles; 0 means unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacbTimes {
    pub modified: i64,
    pub accessed: i64,
    pub changed: i64,
    pub born: i64,
}

impl MacbTimes {
    pub fn get(&self, role: MacbRole) -> i64 {
        match role {
            MacbRole::Modified => self.modified,
            MacbRole::Accessed => self.accessed,
            MacbRole::Changed => self.changed,
            MacbRole::Born => self.born,
        }
    }

    /// Iterate `(role, time)` pairs in MACB order
    pub fn iter(&self) -> impl Iterator<Item = (MacbRole, i64)> + '_ {
        MacbRole::ALL.iter().map(move |role| (*role, self.get(*role)))
    }

    pub fn any_set(&self) -> bool {
        self.iter().any(|(_, time)| time != 0)
    }
}

/// One validated body file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    /// Decoded file name, arbitrary bytes
    pub name: Vec<u8>,
    /// Metadata address (inode), digits and dashes such as `12-128-3`
    pub meta_address: String,
    /// Type and permission string, e.g. `r/rrwxr-xr-x`
    pub mode: String,
    pub uid: String,
    pub gid: String,
    pub size: u64,
    pub times: MacbTimes,
}

/// Identifies one timeline row.
///
/// Field order defines the sort order: time first, then metadata address,
/// then file name bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AggregationKey {
    pub time: i64,
    pub meta_address: String,
    pub name: Vec<u8>,
}

impl AggregationKey {
    pub fn new(time: i64, meta_address: &str, name: &[u8]) -> Self {
        Self {
            time,
            meta_address: meta_address.to_string(),
            name: name.to_vec(),
        }
    }
}

/// Broken-down wall clock time of an epoch value in some zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTime {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    /// Days since Sunday, 0-6
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilTime {
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            weekday: dt.weekday().num_days_from_sunday(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }
}

/// Descriptive columns shown next to every row of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub mode: String,
    pub owner: String,
    pub group: String,
    pub size: u64,
}
