use chrono::NaiveDateTime;
use std::collections::HashMap;
use tabled::Tabled;

/// One cleaned collision record.
///
/// Every record holds a valid timestamp; rows whose date+time failed to
/// parse never make it this far. Count fields are already coerced to
/// non-negative values, and free-text fields are trimmed with empties
/// mapped to `None`.
#[derive(Debug, Clone)]
pub struct CrashRecord {
    pub datetime: NaiveDateTime,
    pub persons_injured: u64,
    pub persons_killed: u64,
    pub on_street: Option<String>,
    pub cross_street: Option<String>,
    pub vehicle_type: Option<String>,
}

/// Frequency table that remembers the first-encounter order of its keys.
///
/// Rankings sort on count alone with a stable sort, so entries with equal
/// counts keep the order in which their keys first appeared in the
/// dataset. That makes every "top N" deterministic for a fixed input
/// ordering, which a bare `HashMap` would not be.
#[derive(Debug, Clone, Default)]
pub struct FreqTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FreqTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total mass: the sum of every count.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn count(&self, key: &str) -> u64 {
        self.index.get(key).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    /// All entries, highest count first; ties keep insertion order.
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut out = self.entries.clone();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut out = self.ranked();
        out.truncate(n);
        out
    }
}

#[derive(Debug, Tabled, Clone)]
pub struct StreetRow {
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[tabled(rename = "Street")]
    pub street: String,
    #[tabled(rename = "Accidents")]
    pub accidents: String,
}

#[derive(Debug, Tabled, Clone)]
pub struct VehicleRow {
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[tabled(rename = "VehicleType")]
    pub vehicle_type: String,
    #[tabled(rename = "Collisions")]
    pub collisions: String,
}

#[derive(Debug, Tabled, Clone)]
pub struct MonthRow {
    #[tabled(rename = "Month")]
    pub month: String,
    #[tabled(rename = "Accidents")]
    pub accidents: String,
}
