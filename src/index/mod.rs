//! Index Module
//!
//! Fixed-width offset index for a log segment.
//!
//! ## Responsibilities
//! - Map a record's relative offset to its byte position in the store file
//! - O(1) lookup by entry number, no parsing of variable-length records
//! - Pre-allocate the file to its configured capacity while open
//! - Trim the file back to its real content on close
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Entry 0                                  │
//! │ ┌──────────────┬───────────────────────┐ │
//! │ │ Offset (4)   │ Position (8)          │ │
//! │ └──────────────┴───────────────────────┘ │
//! ├──────────────────────────────────────────┤
//! │ Entry 1                                  │
//! │ ┌──────────────┬───────────────────────┐ │
//! │ │ Offset (4)   │ Position (8)          │ │
//! │ └──────────────┴───────────────────────┘ │
//! ├──────────────────────────────────────────┤
//! │ ...                                      │
//! ├──────────────────────────────────────────┤
//! │ Unused tail (zeroed, only while open)    │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Both fields are big-endian. Entry `n` lives at `[n * 12, n * 12 + 12)`.
//!
//! ## Lifecycle
//! ```text
//!   open ──► file grown to max_index_bytes ──► mmap (fixed length)
//!              │
//!              ▼
//!   write* ──► size += 12 per entry (in memory only)
//!              │
//!              ▼
//!   close ──► flush mmap ──► fsync ──► unmap ──► truncate to size
//! ```

mod entry;
mod file;
mod iterator;
mod view;

pub use entry::Entry;
pub use file::Index;
pub use iterator::EntryIter;
pub use view::IndexView;

// =============================================================================
// Shared Constants (used by index, view, iterator)
// =============================================================================

/// Width of the relative offset field
pub const OFFSET_WIDTH: u64 = 4;

/// Width of the store position field
pub const POSITION_WIDTH: u64 = 8;

/// Width of one entry: Offset (4) + Position (8) = 12 bytes
pub const ENTRY_WIDTH: u64 = OFFSET_WIDTH + POSITION_WIDTH;

/// Entry number that `read` resolves to the most recently written entry
pub const LAST_ENTRY: i64 = -1;
