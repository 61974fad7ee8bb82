//! Error types for frequency tables.

/// Errors raised when a query cannot be answered by a table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrequencyError {
    /// The byte table has one slot per byte, so only single-byte (ASCII)
    /// characters can be looked up.
    #[error("cannot count '{query}' (U+{code:04X}): only ASCII characters can be queried", code = code_point(.query))]
    NonAsciiQuery { query: char },
}

/// Errors raised when serialized counts do not describe a real table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Keys only exist in a table once they have been recorded.
    #[error("stored count of zero for a key")]
    ZeroCount,

    #[error("declared total {declared} does not match the summed counts {counted}")]
    TotalMismatch { declared: u64, counted: u64 },

    #[error("summed counts overflow u64")]
    Overflow,
}

fn code_point(c: &char) -> u32 {
    u32::from(*c)
}
