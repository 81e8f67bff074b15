//! Configuration for seglog
//!
//! Centralized configuration with sensible defaults.

use crate::error::{Result, SegError};
use crate::index::ENTRY_WIDTH;

/// Main configuration handed down to a segment and its index
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Per-segment limits
    pub segment: SegmentConfig,
}

/// Segment configuration
///
/// The index only reads `max_index_bytes`; the remaining fields belong to
/// the owning segment and its store.
#[derive(Debug, Clone, Copy)]
pub struct SegmentConfig {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Max size of the store file before the segment rolls (in bytes)
    pub max_store_bytes: u64,

    // -------------------------------------------------------------------------
    // Index Configuration
    // -------------------------------------------------------------------------
    /// Max size of the index file (in bytes). The index file is grown to
    /// exactly this length while open, so it also bounds the entry count:
    /// `max_index_bytes / ENTRY_WIDTH`.
    pub max_index_bytes: u64,

    /// Absolute offset of the first record in a fresh log
    pub initial_offset: u64,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            max_store_bytes: 1024 * 1024 * 1024, // 1 GB
            max_index_bytes: 10 * 1024 * 1024,   // 10 MB
            initial_offset: 0,
        }
    }
}

impl SegmentConfig {
    /// Check only the value an index reads (`max_index_bytes`)
    pub fn validate_index(&self) -> Result<()> {
        if self.max_index_bytes < ENTRY_WIDTH {
            return Err(SegError::Config(format!(
                "max_index_bytes must hold at least one entry ({} bytes), got {}",
                ENTRY_WIDTH, self.max_index_bytes
            )));
        }
        if usize::try_from(self.max_index_bytes).is_err() {
            return Err(SegError::Config(format!(
                "max_index_bytes {} exceeds addressable memory",
                self.max_index_bytes
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check every segment value (index and store)
    pub fn validate(&self) -> Result<()> {
        self.segment.validate_index()?;
        if self.segment.max_store_bytes == 0 {
            return Err(SegError::Config(
                "max_store_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of entries an index built from this config can hold
    pub fn max_index_entries(&self) -> u64 {
        self.segment.max_index_bytes / ENTRY_WIDTH
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store size limit (in bytes)
    pub fn max_store_bytes(mut self, bytes: u64) -> Self {
        self.config.segment.max_store_bytes = bytes;
        self
    }

    /// Set the index capacity (in bytes)
    pub fn max_index_bytes(mut self, bytes: u64) -> Self {
        self.config.segment.max_index_bytes = bytes;
        self
    }

    /// Set the index capacity as a number of entries
    pub fn max_index_entries(mut self, entries: u64) -> Self {
        self.config.segment.max_index_bytes = entries.saturating_mul(ENTRY_WIDTH);
        self
    }

    /// Set the offset of the first record
    pub fn initial_offset(mut self, offset: u64) -> Self {
        self.config.segment.initial_offset = offset;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
