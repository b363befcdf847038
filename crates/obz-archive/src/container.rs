//! In-memory archive access.
//!
//! The [`Container`] wraps the raw archive bytes and hands out entry contents
//! by name. It is read-only once opened.

use obz_format::{ObzError, ObzResult};
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

/// Read-only view of an `.obz` archive held in memory.
///
/// # Example
///
/// ```no_run
/// use obz_archive::Container;
///
/// let bytes = std::fs::read("communication.obz")?;
/// let container = Container::open(bytes)?;
/// let manifest = container.read_text("manifest.json")?;
/// # Ok::<(), obz_format::ObzError>(())
/// ```
#[derive(Debug)]
pub struct Container {
    archive: Mutex<ZipArchive<Cursor<Vec<u8>>>>,
    digest: String,
}

impl Container {
    /// Open archive bytes.
    ///
    /// Fails with [`ObzError::Format`] if the bytes are not a zip archive.
    pub fn open(bytes: impl Into<Vec<u8>>) -> ObzResult<Self> {
        let bytes = bytes.into();
        let digest = format!("sha256:{}", hex::encode(Sha256::digest(&bytes)));
        let archive =
            ZipArchive::new(Cursor::new(bytes)).map_err(|e| ObzError::Format(e.to_string()))?;

        debug!(entries = archive.len(), %digest, "opened archive");

        Ok(Self {
            archive: Mutex::new(archive),
            digest,
        })
    }

    /// Read an archive file from disk and open it.
    pub fn open_file<P: AsRef<Path>>(path: P) -> ObzResult<Self> {
        Self::open(std::fs::read(path)?)
    }

    /// SHA256 of the raw archive bytes, as `sha256:<hex>`.
    #[must_use]
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Read an entry as bytes.
    pub fn read_binary(&self, name: &str) -> ObzResult<Vec<u8>> {
        let mut archive = self.archive.lock();
        let index = locate(&archive, name).ok_or_else(|| ObzError::NotFound(name.to_string()))?;

        let mut file = archive
            .by_index(index)
            .map_err(|e| ObzError::Format(format!("{name}: {e}")))?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| ObzError::Format(format!("{name}: {e}")))?;
        Ok(contents)
    }

    /// Read an entry as UTF-8 text, dropping a leading byte order mark.
    pub fn read_text(&self, name: &str) -> ObzResult<String> {
        let bytes = self.read_binary(name)?;
        let mut text = String::from_utf8(bytes)
            .map_err(|e| ObzError::Format(format!("{name}: not UTF-8: {e}")))?;

        if text.starts_with('\u{feff}') {
            text.drain(..'\u{feff}'.len_utf8());
        }
        Ok(text)
    }

    /// Check if an entry exists.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        locate(&self.archive.lock(), name).is_some()
    }

    /// Uncompressed size of an entry, if present.
    #[must_use]
    pub fn entry_size(&self, name: &str) -> Option<u64> {
        let mut archive = self.archive.lock();
        let index = locate(&archive, name)?;
        let size = archive.by_index(index).ok().map(|file| file.size());
        size
    }

    /// List all file entries (directories excluded), in archive order.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        let archive = self.archive.lock();
        (0..archive.len())
            .filter_map(|i| archive.name_for_index(i))
            .filter(|name| !name.ends_with('/'))
            .map(String::from)
            .collect()
    }

    /// Number of entries, directories included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Normalize an archive-relative reference: `./a/b` and `/a/b` become `a/b`.
pub(crate) fn normalize_entry_name(name: &str) -> &str {
    let mut name = name.trim();
    loop {
        if let Some(rest) = name.strip_prefix("./") {
            name = rest;
        } else if let Some(rest) = name.strip_prefix('/') {
            name = rest;
        } else {
            return name;
        }
    }
}

fn locate(archive: &ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Option<usize> {
    archive
        .index_for_name(name)
        .or_else(|| archive.index_for_name(normalize_entry_name(name)))
        .filter(|_| !name.is_empty())
}
