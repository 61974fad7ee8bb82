//! Tally Core
//!
//! In-memory sorting and counting routines shared by the `tally` CLI and
//! benchmarks. Nothing here performs I/O or keeps state between calls.

pub mod bytes;
pub mod error;
pub mod frequency;
pub mod sort;

pub use bytes::ByteFrequency;
pub use error::{FrequencyError, TableError};
pub use frequency::{FrequencyEntry, FrequencyTable, QueryAnswer};
pub use sort::{
    selection_sort, selection_sort_by, selection_sort_by_key, selection_sort_with_stats,
    SortStats,
};
