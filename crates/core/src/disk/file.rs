//! Host-file backing store.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{BlockDevice, check_request};
use crate::common::constants::BLOCK_SIZE;
use crate::common::{Result, SimError};

/// A backing store kept in a regular file.
///
/// The file is created if missing and truncated to exactly
/// `nblocks * BLOCK_SIZE` zero bytes, so a fresh run never sees stale data
/// from an earlier one.
#[derive(Debug)]
pub struct FileDisk {
    file: File,
    path: PathBuf,
    nblocks: usize,
}

impl FileDisk {
    /// Opens (creating or truncating) the disk file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DiskOpen` with the system error if the file cannot
    /// be created or sized.
    pub fn open(path: impl AsRef<Path>, nblocks: usize) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let open_err = |source| SimError::DiskOpen {
            path: path.clone(),
            source,
        };
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(open_err)?;
        file.set_len((nblocks * BLOCK_SIZE) as u64)
            .map_err(open_err)?;
        debug!(path = %path.display(), nblocks, "opened disk file");
        Ok(Self {
            file,
            path,
            nblocks,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn seek_to(&mut self, block: usize) -> io::Result<()> {
        let _ = self
            .file
            .seek(SeekFrom::Start((block * BLOCK_SIZE) as u64))?;
        Ok(())
    }
}

impl BlockDevice for FileDisk {
    fn nblocks(&self) -> usize {
        self.nblocks
    }

    fn read_block(&mut self, block: usize, buf: &mut [u8]) -> io::Result<()> {
        check_request(block, buf.len(), self.nblocks)?;
        self.seek_to(block)?;
        self.file.read_exact(buf)
    }

    fn write_block(&mut self, block: usize, buf: &[u8]) -> io::Result<()> {
        check_request(block, buf.len(), self.nblocks)?;
        self.seek_to(block)?;
        self.file.write_all(buf)
    }
}
