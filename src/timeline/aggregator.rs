use std::collections::{BTreeMap, HashMap};
use std::io::BufRead;

use anyhow::{Context, Result};
use log::debug;

use crate::config::TimeWindow;
use crate::models::{AggregationKey, FileDescriptor, MacbFlags, MetadataRecord};
use crate::utils::bodyfile::{parse_line, LineOutcome, SkipReason};
use crate::utils::names::NameLookup;

/// Counters from one ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: usize,
    pub records: usize,
    /// Lines that did not parse into a record (blank and comment lines included)
    pub skipped: usize,
    /// Parsed records with every time before the window start
    pub outside_window: usize,
}

/// Aggregated state of one run: the ordered rows plus per-file columns and the
/// owner and group name tables.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    window: TimeWindow,
    entries: BTreeMap<AggregationKey, MacbFlags>,
    files: HashMap<Vec<u8>, FileDescriptor>,
    owners: NameLookup,
    groups: NameLookup,
}

impl Timeline {
    pub fn new(window: TimeWindow, owners: NameLookup, groups: NameLookup) -> Self {
        Self {
            window,
            entries: BTreeMap::new(),
            files: HashMap::new(),
            owners,
            groups,
        }
    }

    /// Fold one record into the timeline. Returns false when the record lies
    /// entirely before the window and was dropped.
    pub fn ingest(&mut self, record: MetadataRecord) -> bool {
        if self.window.entirely_before(&record.times) {
            return false;
        }

        for (role, time) in record.times.iter() {
            if self.window.contains(time) {
                let key = AggregationKey::new(time, &record.meta_address, &record.name);
                self.entries.entry(key).or_default().insert(role);
            }
        }

        self.owners.seed(&record.uid);
        self.groups.seed(&record.gid);

        let descriptor = FileDescriptor {
            mode: record.mode,
            owner: self.owners.display(&record.uid),
            group: self.groups.display(&record.gid),
            size: record.size,
        };
        self.files.insert(record.name, descriptor);
        true
    }

    /// Read body file lines from `reader` until end of input.
    ///
    /// Unusable lines are skipped and only logged at debug level; read errors
    /// abort the pass.
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R) -> Result<IngestStats> {
        let mut stats = IngestStats::default();

        for line in reader.split(b'\n') {
            let line = line.context("Failed to read body file")?;
            stats.lines += 1;

            match parse_line(&line) {
                LineOutcome::Record(record) => {
                    if self.ingest(record) {
                        stats.records += 1;
                    } else {
                        stats.outside_window += 1;
                    }
                }
                LineOutcome::Skip(SkipReason::Blank) | LineOutcome::Skip(SkipReason::Comment) => {
                    stats.skipped += 1;
                }
                LineOutcome::Skip(reason) => {
                    debug!("Skipping line {}: {}", stats.lines, reason);
                    stats.skipped += 1;
                }
            }
        }

        debug!(
            "Read {} lines: {} records, {} skipped, {} outside window, {} timeline entries",
            stats.lines,
            stats.records,
            stats.skipped,
            stats.outside_window,
            self.entries.len()
        );
        Ok(stats)
    }

    /// Rows in ascending key order
    pub fn entries(&self) -> impl Iterator<Item = (&AggregationKey, &MacbFlags)> {
        self.entries.iter()
    }

    pub fn flags(&self, key: &AggregationKey) -> Option<&MacbFlags> {
        self.entries.get(key)
    }

    pub fn descriptor(&self, name: &[u8]) -> Option<&FileDescriptor> {
        self.files.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn owners(&self) -> &NameLookup {
        &self.owners
    }

    pub fn groups(&self) -> &NameLookup {
        &self.groups
    }
}
