//! File backed store
//!
//! Keeps the decimal text of the last saved millisecond at offset 0 of a
//! single file and overwrites it in place.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Storage, StorageError};

/// [`Storage`] backed by one file on disk
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    file: File,
}

impl FileStorage {
    /// Open `path` for reading and writing, creating it when missing
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        debug!(path = %path.display(), "opened time storage file");
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn get(&mut self) -> Result<u64, StorageError> {
        let mut content = String::new();
        self.file.seek(SeekFrom::Start(0))?;
        self.file.read_to_string(&mut content)?;

        let value = content.trim();
        if value.is_empty() {
            return Err(StorageError::Empty {
                path: self.path.clone(),
            });
        }
        value.parse::<u64>().map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            value: value.to_string(),
            source,
        })
    }

    fn save(&mut self, millis: u64) -> Result<(), StorageError> {
        let text = millis.to_string();
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(text.as_bytes())?;
        // a shorter value must not leave digits of the previous one behind
        self.file.set_len(text.len() as u64)?;
        self.file.sync_data()?;
        Ok(())
    }
}
