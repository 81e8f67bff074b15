//! Index View
//!
//! Read-only access to a closed index file.

use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::error::{Result, SegError};

use super::entry::lookup;
use super::{Entry, EntryIter, ENTRY_WIDTH};

/// Read-only mapping over a closed (trimmed) index file
///
/// The whole file is treated as content, so it must not be opened on an
/// index that is still live: its pre-allocated tail would read as zeroed
/// entries.
#[derive(Debug)]
pub struct IndexView {
    path: PathBuf,
    /// None for an empty file (zero-length files can't be mapped)
    mmap: Option<Mmap>,
    size: u64,
}

impl IndexView {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let size = file.metadata()?.len();

        if size % ENTRY_WIDTH != 0 {
            return Err(SegError::Corrupt(format!(
                "{}: length {} is not a multiple of the entry width {}",
                path.display(),
                size,
                ENTRY_WIDTH
            )));
        }

        let mmap = if size == 0 {
            None
        } else {
            // SAFETY: read-only mapping of a sealed index; all access is
            // bounds-checked against `size`, which equals the mapping length.
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
            size,
        })
    }

    /// Look up an entry by number (`-1` for the last one)
    pub fn read(&self, relative: i64) -> Result<Entry> {
        lookup(self.bytes(), self.size, relative)
    }

    pub fn name(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn len(&self) -> u64 {
        self.size / ENTRY_WIDTH
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn entries(&self) -> EntryIter<'_> {
        EntryIter::new(self.bytes())
    }

    fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}
