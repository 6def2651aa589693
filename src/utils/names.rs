use std::collections::HashMap;
use std::fs;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::constants::{
    ERROR_CANNOT_OPEN, NAME_FILE_CONTINUATION, NAME_FILE_DELIMITER, NAME_SPACE_REPLACEMENT,
};

/// Maps numeric owner or group ids to display names.
///
/// An id may carry several names when the lookup source lists it more than
/// once; they are kept in insertion order. Unknown ids resolve to themselves.
#[derive(Debug, Clone, Default)]
pub struct NameLookup {
    names: HashMap<String, Vec<String>>,
}

impl NameLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` to the names recorded for `id`.
    pub fn add(&mut self, id: &str, name: &str) {
        self.names
            .entry(id.to_string())
            .or_default()
            .push(name.to_string());
    }

    /// Register `id` with itself as placeholder name unless it is already known.
    pub fn seed(&mut self, id: &str) {
        if !self.names.contains_key(id) {
            self.names.insert(id.to_string(), vec![id.to_string()]);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Display form used in timeline columns.
    ///
    /// Names are space-joined and every space is then replaced so the value
    /// never contains a blank, e.g. `["John Doe", "jd"]` becomes `John/Doe/jd`.
    pub fn display(&self, id: &str) -> String {
        match self.names.get(id) {
            Some(names) => names.join(" ").replace(' ', NAME_SPACE_REPLACEMENT),
            None => id.replace(' ', NAME_SPACE_REPLACEMENT),
        }
    }

    /// Load `name:x:id:...` records (passwd and group share this layout).
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lookup = Self::new();
        for line in reader.split(b'\n') {
            let line = line.context("Failed to read name lookup data")?;
            lookup.add_record(&String::from_utf8_lossy(&line));
        }
        Ok(lookup)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read(path)
            .with_context(|| format!("{} {}", ERROR_CANNOT_OPEN, path.display()))?;
        let lookup = Self::from_reader(content.as_slice())?;
        debug!("Loaded {} ids from {}", lookup.len(), path.display());
        Ok(lookup)
    }

    /// Load from `path` when given, otherwise start empty.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::new()),
        }
    }

    fn add_record(&mut self, line: &str) {
        let line = line.trim();
        if line.starts_with(NAME_FILE_CONTINUATION) {
            return;
        }
        let fields: Vec<&str> = line.split(NAME_FILE_DELIMITER).collect();
        if fields.len() < 3 {
            return;
        }
        let (name, id) = (fields[0], fields[2]);
        if !name.is_empty() && !id.is_empty() {
            self.add(id, name);
        }
    }
}
