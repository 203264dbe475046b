//! Image persistence.
//!
//! Writers take an already-synthesized filename and a payload and put one
//! file on disk. Failures are returned to the walker, which logs them and
//! moves on; no retry, and a partially written file is not cleaned up.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::{EmbeddedImage, ImageFormat};

/// Ensure the destination directory exists, creating intermediate
/// directories as needed. Idempotent.
pub fn ensure_output_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Destination for extracted images.
///
/// The two strategies persist images differently (verbatim filename versus
/// derived extension), and tests substitute failing sinks to exercise
/// per-image fault isolation.
pub trait ImageSink {
    /// Write one image under the synthesized filename.
    ///
    /// Returns the path of the created file.
    fn write(&mut self, filename: &str, image: &EmbeddedImage) -> Result<PathBuf>;
}

/// Writes payloads verbatim under the synthesized filename.
///
/// Used by the object-model strategy, whose base names already carry a
/// format suffix.
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    /// Create a sink over a destination directory.
    ///
    /// The directory must already exist; see [`ensure_output_dir`].
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl ImageSink for DirectorySink {
    fn write(&mut self, filename: &str, image: &EmbeddedImage) -> Result<PathBuf> {
        let path = self.directory.join(filename);
        fs::write(&path, &image.data).map_err(|e| Error::ImageWrite {
            filename: filename.to_string(),
            reason: e.to_string(),
        })?;
        Ok(path)
    }
}

/// Writes payloads under the synthesized filename plus a derived extension.
///
/// Used by the layout-tree strategy, whose base names are bare XObject
/// keys: the on-disk extension comes from the image's labeled format, or
/// from payload magic bytes when the label is raw.
pub struct LayoutImageWriter {
    directory: PathBuf,
}

impl LayoutImageWriter {
    /// Create a writer over a destination directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Extension chosen for an image.
    fn extension(image: &EmbeddedImage) -> &'static str {
        match image.format {
            ImageFormat::Raw => ImageFormat::sniff(&image.data).extension(),
            other => other.extension(),
        }
    }
}

impl ImageSink for LayoutImageWriter {
    fn write(&mut self, filename: &str, image: &EmbeddedImage) -> Result<PathBuf> {
        let path = self
            .directory
            .join(format!("{}.{}", filename, Self::extension(image)));
        fs::write(&path, &image.data).map_err(|e| Error::ImageWrite {
            filename: filename.to_string(),
            reason: e.to_string(),
        })?;
        Ok(path)
    }
}
