//! Record statistics types

use std::collections::HashMap;

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Per-type record counter keeping the order in which types were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTypeCounts {
    counts: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl RecordTypeCounts {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one record of `record_type`.
    pub fn add(&mut self, record_type: &str) {
        if let Some(&pos) = self.index.get(record_type) {
            self.counts[pos].1 += 1;
        } else {
            self.index.insert(record_type.to_string(), self.counts.len());
            self.counts.push((record_type.to_string(), 1));
        }
    }

    /// Count for `record_type` (0 if never seen).
    pub fn get(&self, record_type: &str) -> u64 {
        self.index
            .get(record_type)
            .map_or(0, |&pos| self.counts[pos].1)
    }

    /// `(type, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Sum over all types.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    /// Whether nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Serialize for RecordTypeCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (record_type, count) in &self.counts {
            map.serialize_entry(record_type, count)?;
        }
        map.end()
    }
}
