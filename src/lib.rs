//! # seglog
//!
//! Persistent offset index for log-structured storage segments:
//! - Fixed 12-byte entries mapping relative offsets to store positions
//! - Memory-mapped, O(1) lookup by entry number
//! - Capacity pre-allocated on open, trimmed on close
//! - Ordered durability on shutdown (flush → fsync → truncate)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Segment (caller)                          │
//! │         owns one store file + one index, decides roll       │
//! └───────────────┬─────────────────────────────┬───────────────┘
//!                 │ write(offset, position)     │ read(entry)
//!                 ▼                             ▼
//!          ┌─────────────────────────────────────────┐
//!          │                 Index                   │
//!          │   size counter  +  MmapMut (fixed len)  │
//!          └───────────────────┬─────────────────────┘
//!                              │ close()
//!                              ▼
//!          ┌─────────────────────────────────────────┐
//!          │   index file, trimmed to size           │
//!          │   (read back later via IndexView)       │
//!          └─────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod index;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EndOfIndex, SegError, Result};
pub use config::{Config, SegmentConfig};
pub use index::{Entry, Index, IndexView, ENTRY_WIDTH, LAST_ENTRY};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of seglog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
