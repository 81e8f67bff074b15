//! Index File
//!
//! The writable, memory-mapped index owned by a segment.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use memmap2::MmapMut;
use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::error::{EndOfIndex, Result, SegError};

use super::entry::lookup;
use super::{Entry, EntryIter, ENTRY_WIDTH};

/// Memory-mapped offset index
///
/// ## Ownership:
/// - `write` takes `&mut self`: one writer, entries appended in order
/// - `read` takes `&self`: any number of concurrent readers
/// - `close` takes `self`: no read or write can outlive it
///
/// Callers that share an index across threads wrap it in their own lock.
pub struct Index {
    /// Backing file path (for identification)
    path: PathBuf,
    /// Backing file handle
    file: File,
    /// Read-write mapping over the whole pre-allocated file
    mmap: MmapMut,
    /// Bytes holding valid entries
    size: u64,
}

impl Index {
    /// Wrap an already open index file
    ///
    /// The file must be readable and writable. Its current length becomes
    /// the logical size, so a previously closed index resumes where it
    /// stopped. The file is then grown to `max_index_bytes` and mapped.
    pub fn new(file: File, path: impl Into<PathBuf>, config: &Config) -> Result<Self> {
        config.segment.validate_index()?;
        let path = path.into();
        let capacity = config.segment.max_index_bytes;

        let size = file.metadata()?.len();
        if size % ENTRY_WIDTH != 0 {
            return Err(SegError::Corrupt(format!(
                "{}: length {} is not a multiple of the entry width {}",
                path.display(),
                size,
                ENTRY_WIDTH
            )));
        }
        if size > capacity {
            return Err(SegError::Config(format!(
                "{}: holds {} bytes, more than max_index_bytes {}",
                path.display(),
                size,
                capacity
            )));
        }

        // A mapping can't grow, so reserve the whole capacity up front
        file.set_len(capacity)?;

        // SAFETY: the mapping covers exactly the file length set above and is
        // owned alongside the file. Every access is bounds-checked against
        // `size` or the mapping length, and the file is not truncated until
        // `close` has dropped the mapping.
        let mmap = unsafe { MmapMut::map_mut(&file)? };

        debug!(
            path = %path.display(),
            size,
            capacity,
            "opened index"
        );

        Ok(Self {
            path,
            file,
            mmap,
            size,
        })
    }

    /// Open or create the index file at `path`
    pub fn open(path: impl AsRef<Path>, config: &Config) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(path)?;

        Self::new(file, path, config)
    }

    /// Look up an entry by number
    ///
    /// `-1` (`LAST_ENTRY`) returns the most recently written entry.
    /// Fails with `EndOfIndex` if the index is empty or the entry was never
    /// written.
    pub fn read(&self, relative: i64) -> Result<Entry> {
        lookup(&self.mmap, self.size, relative)
    }

    /// Append an entry
    ///
    /// Fails with `EndOfIndex::Full` once no room remains; the segment is
    /// expected to roll over. Nothing is forced to disk until `close`.
    pub fn write(&mut self, offset: u32, position: u64) -> Result<()> {
        if self.is_full() {
            warn!(
                path = %self.path.display(),
                capacity = self.capacity(),
                "index full"
            );
            return Err(SegError::EndOfIndex(EndOfIndex::Full {
                capacity: self.capacity(),
            }));
        }

        let start = self.size as usize;
        Entry::new(offset, position).encode(&mut self.mmap[start..start + ENTRY_WIDTH as usize]);
        self.size += ENTRY_WIDTH;

        trace!(offset, position, size = self.size, "index write");
        Ok(())
    }

    /// Start writeback of dirty pages without waiting for it
    pub fn flush_async(&self) -> Result<()> {
        self.mmap.flush_async()?;
        Ok(())
    }

    /// Persist and release the index
    ///
    /// Order matters: the mapping is flushed and the file synced before the
    /// pre-allocated tail is cut off, so a crash mid-close never loses
    /// written entries. Stops at the first failure.
    pub fn close(self) -> Result<()> {
        let Index {
            path,
            file,
            mmap,
            size,
        } = self;

        mmap.flush()?;
        file.sync_all()?;

        // Unmap before shrinking the file underneath it
        drop(mmap);
        file.set_len(size)?;

        // Dropping a File swallows errors, so surface them here
        file.sync_all()?;
        drop(file);

        debug!(path = %path.display(), size, "closed index");
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Backing file path
    pub fn name(&self) -> &Path {
        &self.path
    }

    /// Bytes holding valid entries
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Mapped length in bytes (`max_index_bytes`)
    pub fn capacity(&self) -> u64 {
        self.mmap.len() as u64
    }

    /// Number of entries written
    pub fn len(&self) -> u64 {
        self.size / ENTRY_WIDTH
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// No room for one more entry
    pub fn is_full(&self) -> bool {
        self.capacity() < self.size + ENTRY_WIDTH
    }

    /// Iterate over written entries in order
    pub fn entries(&self) -> EntryIter<'_> {
        EntryIter::new(&self.mmap[..self.size as usize])
    }
}

impl std::fmt::Debug for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Index")
            .field("path", &self.path)
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .finish()
    }
}
