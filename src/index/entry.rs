//! Index Entry definitions
//!
//! Encoding and lookup of the fixed 12-byte entries.

use bytes::{Buf, BufMut};

use crate::error::{EndOfIndex, Result, SegError};

use super::{ENTRY_WIDTH, LAST_ENTRY};

/// A single index entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Record offset relative to the segment's base offset
    pub offset: u32,

    /// Byte position of the record in the store file
    pub position: u64,
}

impl Entry {
    pub fn new(offset: u32, position: u64) -> Self {
        Self { offset, position }
    }

    /// Decode from exactly `ENTRY_WIDTH` bytes
    pub(crate) fn decode(mut buf: &[u8]) -> Self {
        debug_assert_eq!(buf.len() as u64, ENTRY_WIDTH);
        let offset = buf.get_u32();
        let position = buf.get_u64();
        Self { offset, position }
    }

    /// Encode into exactly `ENTRY_WIDTH` bytes
    pub(crate) fn encode(&self, mut buf: &mut [u8]) {
        debug_assert_eq!(buf.len() as u64, ENTRY_WIDTH);
        buf.put_u32(self.offset);
        buf.put_u64(self.position);
    }
}

impl From<Entry> for (u32, u64) {
    fn from(entry: Entry) -> Self {
        (entry.offset, entry.position)
    }
}

/// Resolve `relative` against the first `size` bytes of `region`
///
/// `LAST_ENTRY` resolves to the newest entry. Anything else must be a
/// written entry number.
pub(crate) fn lookup(region: &[u8], size: u64, relative: i64) -> Result<Entry> {
    if size == 0 {
        return Err(SegError::EndOfIndex(EndOfIndex::Empty));
    }

    let entries = size / ENTRY_WIDTH;
    let out_of_range = || SegError::EndOfIndex(EndOfIndex::OutOfRange {
        entry: relative,
        entries,
    });

    let entry = if relative == LAST_ENTRY {
        entries - 1
    } else {
        u64::try_from(relative).map_err(|_| out_of_range())?
    };

    // Bounds-check the entry number before any byte arithmetic
    if entry >= entries {
        return Err(out_of_range());
    }

    let start = (entry * ENTRY_WIDTH) as usize;
    Ok(Entry::decode(&region[start..start + ENTRY_WIDTH as usize]))
}
