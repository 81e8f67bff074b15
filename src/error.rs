//! Error types for seglog
//!
//! Provides a unified error type for all index operations.

use std::fmt;

use thiserror::Error;

/// Result type alias using SegError
pub type Result<T> = std::result::Result<T, SegError>;

/// Unified error type for seglog operations
#[derive(Debug, Error)]
pub enum SegError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Index Errors
    // -------------------------------------------------------------------------
    /// Expected condition, not a fault: the entry does not exist or the
    /// index has no room left. Segments roll over on the latter.
    #[error("end of index: {0}")]
    EndOfIndex(EndOfIndex),

    #[error("Index corruption detected: {0}")]
    Corrupt(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SegError {
    /// True for any end-of-index condition (missing entry or full index)
    pub fn is_end_of_index(&self) -> bool {
        matches!(self, SegError::EndOfIndex(_))
    }

    /// True only when a write was refused for lack of capacity
    pub fn is_full(&self) -> bool {
        matches!(self, SegError::EndOfIndex(EndOfIndex::Full { .. }))
    }
}

/// Why an index operation ran off the end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOfIndex {
    /// Nothing has been written yet
    Empty,

    /// Requested entry is past the last written one (or negative)
    OutOfRange { entry: i64, entries: u64 },

    /// No room for another entry
    Full { capacity: u64 },
}

impl fmt::Display for EndOfIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndOfIndex::Empty => write!(f, "index is empty"),
            EndOfIndex::OutOfRange { entry, entries } => {
                write!(f, "entry {} out of range ({} entries)", entry, entries)
            }
            EndOfIndex::Full { capacity } => {
                write!(f, "index full ({} bytes capacity)", capacity)
            }
        }
    }
}
