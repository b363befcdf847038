//! Fixture archive assembly.
//!
//! The [`ArchiveBuilder`] provides a fluent API for putting together `.obz`
//! archives in tests. It is only compiled for this crate's tests or with the
//! `test-support` feature.

use obz_format::{MANIFEST_FILE, Manifest, ObzError, ObzResult};
use serde_json::Value;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builder for fixture archives.
///
/// # Example
///
/// ```ignore
/// use obz_archive::ArchiveBuilder;
/// use obz_format::Manifest;
/// use serde_json::json;
///
/// let bytes = ArchiveBuilder::new()
///     .manifest(Manifest::standalone("home"))
///     .add_json("board.obf", &json!({"id": "home", "grid": {"order": []}, "buttons": []}))
///     .to_bytes()?;
/// # Ok::<(), obz_format::ObzError>(())
/// ```
#[derive(Debug, Default)]
pub struct ArchiveBuilder {
    manifest: Option<Manifest>,
    files: Vec<ArchiveFile>,
}

/// A file to include in the archive.
#[derive(Debug)]
struct ArchiveFile {
    /// Path within the archive.
    archive_path: String,
    /// File contents.
    contents: Vec<u8>,
}

impl ArchiveBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write this manifest as `manifest.json` ahead of every other entry.
    #[must_use]
    pub fn manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Add a JSON document (typically a board) at `archive_path`.
    #[must_use]
    pub fn add_json(self, archive_path: &str, document: &Value) -> Self {
        self.add_bytes(archive_path, document.to_string().into_bytes())
    }

    /// Add raw bytes as a file in the archive.
    #[must_use]
    pub fn add_bytes(mut self, archive_path: &str, contents: Vec<u8>) -> Self {
        self.files.push(ArchiveFile {
            archive_path: archive_path.to_string(),
            contents,
        });
        self
    }

    /// Assemble the archive in memory.
    pub fn to_bytes(&self) -> ObzResult<Vec<u8>> {
        let zip_err = |e: zip::result::ZipError| ObzError::Format(e.to_string());

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        if let Some(manifest) = &self.manifest {
            zip.start_file(MANIFEST_FILE, options).map_err(zip_err)?;
            zip.write_all(manifest.to_json()?.as_bytes())?;
        }

        for file in &self.files {
            zip.start_file(file.archive_path.as_str(), options)
                .map_err(zip_err)?;
            zip.write_all(&file.contents)?;
        }

        Ok(zip.finish().map_err(zip_err)?.into_inner())
    }

    /// Write the archive to a file.
    pub fn write<P: AsRef<Path>>(&self, output_path: P) -> ObzResult<()> {
        fs::write(output_path, self.to_bytes()?)?;
        Ok(())
    }
}
