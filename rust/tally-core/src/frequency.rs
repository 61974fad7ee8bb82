//! Occurrence counting over ordered keys.
//!
//! A [`FrequencyTable`] maps each distinct value to the number of times it
//! was recorded. Keys iterate in ascending order. Looking up a value that
//! was never recorded with [`FrequencyTable::count`] yields zero; use
//! [`FrequencyTable::get`] when absence has to be told apart.
//!
//! Deserialized tables are checked: every stored count is at least one and
//! the stored total equals the sum of the counts.

use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `(value, count)` row, in the shape written to JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry<K> {
    pub value: K,
    pub count: u64,
}

/// The answer to a single point query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryAnswer<K> {
    pub query: K,
    pub count: u64,
}

/// Counts of distinct values, ordered by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawTable<K>",
    bound(
        serialize = "K: Ord + Serialize",
        deserialize = "K: Ord + Deserialize<'de>"
    )
)]
pub struct FrequencyTable<K> {
    counts: BTreeMap<K, u64>,
    total: u64,
}

/// Unchecked serialized form of [`FrequencyTable`].
#[derive(Deserialize)]
#[serde(bound(deserialize = "K: Ord + Deserialize<'de>"))]
struct RawTable<K> {
    counts: BTreeMap<K, u64>,
    total: u64,
}

impl<K: Ord> TryFrom<RawTable<K>> for FrequencyTable<K> {
    type Error = TableError;

    fn try_from(raw: RawTable<K>) -> Result<Self, Self::Error> {
        let mut counted: u64 = 0;
        for &count in raw.counts.values() {
            if count == 0 {
                return Err(TableError::ZeroCount);
            }
            counted = counted.checked_add(count).ok_or(TableError::Overflow)?;
        }
        if counted != raw.total {
            return Err(TableError::TotalMismatch {
                declared: raw.total,
                counted,
            });
        }
        Ok(Self {
            counts: raw.counts,
            total: raw.total,
        })
    }
}

impl<K: Ord> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<K: Ord> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `key`.
    pub fn record(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of `key`; zero when it was never recorded.
    pub fn count(&self, key: &K) -> u64 {
        self.get(key).unwrap_or(0)
    }

    /// Occurrences of `key`, or `None` when it was never recorded.
    pub fn get(&self, key: &K) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.counts.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of recorded occurrences across all keys.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `(key, count)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.counts.iter().map(|(k, &c)| (k, c))
    }

    /// The key with the highest count. Ties go to the smallest key.
    pub fn most_common(&self) -> Option<(&K, u64)> {
        // max_by_key keeps the last maximum, so walk keys in reverse
        self.counts
            .iter()
            .rev()
            .max_by_key(|&(_, &count)| count)
            .map(|(k, &count)| (k, count))
    }

    /// Answer each query in order. Absent queries are answered with zero.
    pub fn answer<I>(&self, queries: I) -> Vec<QueryAnswer<K>>
    where
        I: IntoIterator<Item = K>,
    {
        queries
            .into_iter()
            .map(|query| {
                let count = self.count(&query);
                QueryAnswer { query, count }
            })
            .collect()
    }
}

impl<K: Ord + Clone> FrequencyTable<K> {
    /// Owned rows in ascending key order.
    pub fn entries(&self) -> Vec<FrequencyEntry<K>> {
        self.iter()
            .map(|(value, count)| FrequencyEntry {
                value: value.clone(),
                count,
            })
            .collect()
    }
}

impl<K: Ord> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        tracing::debug!(
            distinct = table.len(),
            total = table.total,
            "built frequency table"
        );
        table
    }
}

impl<K: Ord> Extend<K> for FrequencyTable<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.record(key);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
