//! Writing the fixture to disk.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, trace};
use rand::RngCore;

use crate::config::HEADER_LEN;
use crate::error::{Error, Result};
use crate::image::ImageBuffer;

/// Outcome of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSummary {
    /// Where the fixture was written.
    pub path: PathBuf,
    /// Number of bytes written, header included.
    pub bytes_written: u64,
    /// Number of header bytes at the start of the file.
    pub header_len: usize,
}

impl FixtureSummary {
    /// Final path component, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

/// Creates the output file, truncating any existing contents.
///
/// On Unix a newly created file gets [`crate::config::FILE_MODE`] permissions.
///
/// # Errors
///
/// Returns [`Error::CreateOutput`] if the parent directory does not exist or
/// the file cannot be opened for writing.
pub fn create_output(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(crate::config::FILE_MODE);
    }

    options.open(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the whole image to `output` in a single `write_all` and flushes it.
///
/// `path` is used only to label errors.
///
/// # Errors
///
/// Returns [`Error::WriteOutput`] if the writer rejects the data or the flush
/// fails.
pub fn write_image<W: Write + ?Sized>(
    output: &mut W,
    image: &ImageBuffer,
    path: &Path,
) -> Result<()> {
    let map_err = |source: io::Error| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    output.write_all(image.as_bytes()).map_err(map_err)?;
    output.flush().map_err(map_err)
}

/// Generates a fixture at `path` with body bytes drawn from `rng`.
///
/// The file is opened before the buffer is filled, so an unwritable target
/// fails without consuming randomness. The handle is synced and then dropped
/// on every path.
///
/// # Errors
///
/// - [`Error::CreateOutput`] if the file cannot be created
/// - [`Error::WriteOutput`] if the data cannot be written
/// - [`Error::SyncOutput`] if the data cannot be flushed to storage
pub fn generate_fixture<R: RngCore + ?Sized>(
    path: &Path,
    rng: &mut R,
) -> Result<FixtureSummary> {
    let mut file = create_output(path)?;
    debug!("opened {}", path.display());

    let image = ImageBuffer::generate(rng);
    debug!("filled {} byte buffer", image.len());

    write_image(&mut file, &image, path)?;
    trace!("wrote {} bytes to {}", image.len(), path.display());

    file.sync_all().map_err(|source| Error::SyncOutput {
        path: path.to_path_buf(),
        source,
    })?;
    drop(file);
    debug!("closed {}", path.display());

    Ok(FixtureSummary {
        path: path.to_path_buf(),
        bytes_written: image.len() as u64,
        header_len: HEADER_LEN,
    })
}
