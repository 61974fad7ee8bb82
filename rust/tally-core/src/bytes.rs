//! Fixed-size byte counter for text.
//!
//! One slot per byte value, so recording is a single increment and a query
//! is a single index. Text is counted byte by byte; characters outside
//! ASCII occupy several UTF-8 bytes and cannot be queried as a unit.

use crate::error::FrequencyError;
use crate::frequency::{FrequencyEntry, QueryAnswer};

const SLOTS: usize = 256;

/// Occurrence counts for each of the 256 byte values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteFrequency {
    counts: [u64; SLOTS],
    total: u64,
}

impl Default for ByteFrequency {
    fn default() -> Self {
        Self {
            counts: [0; SLOTS],
            total: 0,
        }
    }
}

impl ByteFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every byte of `text`.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        table.record_text(text);
        tracing::debug!(
            bytes = table.total,
            distinct = table.distinct(),
            "built byte frequency table"
        );
        table
    }

    pub fn record_text(&mut self, text: &str) {
        for &b in text.as_bytes() {
            self.counts[usize::from(b)] += 1;
        }
        self.total += text.len() as u64;
    }

    /// Occurrences of byte `b`; zero when it never appeared.
    pub fn count_byte(&self, b: u8) -> u64 {
        self.counts[usize::from(b)]
    }

    /// Occurrences of the ASCII character `c`.
    pub fn count_char(&self, c: char) -> Result<u64, FrequencyError> {
        if !c.is_ascii() {
            return Err(FrequencyError::NonAsciiQuery { query: c });
        }
        Ok(self.count_byte(c as u8))
    }

    /// Answer each character query in order, stopping at the first that
    /// cannot be answered.
    pub fn answer<I>(&self, queries: I) -> Result<Vec<QueryAnswer<char>>, FrequencyError>
    where
        I: IntoIterator<Item = char>,
    {
        queries
            .into_iter()
            .map(|query| {
                let count = self.count_char(query)?;
                Ok(QueryAnswer { query, count })
            })
            .collect()
    }

    /// Non-zero `(byte, count)` pairs in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (0..=u8::MAX)
            .zip(self.counts.iter().copied())
            .filter(|&(_, count)| count > 0)
    }

    /// Number of distinct byte values seen.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Number of bytes recorded.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Rows for the printable ASCII bytes seen (space included), keyed by
    /// character.
    ///
    /// Control bytes and bytes above 0x7F are left out; their counts remain
    /// visible through [`ByteFrequency::iter`] and queryable directly.
    pub fn entries(&self) -> Vec<FrequencyEntry<char>> {
        self.iter()
            .filter(|&(b, _)| b.is_ascii_graphic() || b == b' ')
            .map(|(b, count)| FrequencyEntry {
                value: char::from(b),
                count,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
