//! Index Iterator
//!
//! Sequential iteration over the written entries of an index.

use std::slice::ChunksExact;

use super::{Entry, ENTRY_WIDTH};

/// Iterator over index entries in write order
pub struct EntryIter<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> EntryIter<'a> {
    /// `bytes` must be the logical content only (a multiple of ENTRY_WIDTH)
    pub(super) fn new(bytes: &'a [u8]) -> Self {
        Self {
            chunks: bytes.chunks_exact(ENTRY_WIDTH as usize),
        }
    }
}

impl<'a> Iterator for EntryIter<'a> {
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(Entry::decode)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<'a> DoubleEndedIterator for EntryIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chunks.next_back().map(Entry::decode)
    }
}

impl<'a> ExactSizeIterator for EntryIter<'a> {}
