use anyhow::{Result, Context};
use std::fs;
use std::fs::OpenOptions;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @expands: Leading `~` to the user's home directory
    pub fn expand_home<P: AsRef<Path>>(path: P) -> PathBuf {
        let path = path.as_ref();
        match path.strip_prefix("~") {
            Ok(rest) => match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => path.to_path_buf(),
            },
            Err(_) => path.to_path_buf(),
        }
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Read a file to a string, treating a missing file as empty
    pub fn read_or_empty<P: AsRef<Path>>(path: P) -> Result<String> {
        if !Self::file_exists(&path) {
            return Ok(String::new());
        }
        Self::read_to_string(path)
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Replace a file's content through a temporary file in the same directory
    ///
    /// Readers see either the old or the new content, never a partial write.
    pub fn write_atomically<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self::ensure_dir(&dir)?;

        let mut temp = NamedTempFile::new_in(&dir)
            .with_context(|| format!("Failed to create temporary file in: {:?}", dir))?;
        temp.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write temporary file for: {:?}", path))?;
        temp.as_file().sync_all()
            .with_context(|| format!("Failed to flush temporary file for: {:?}", path))?;
        temp.persist(path)
            .with_context(|| format!("Failed to replace file: {:?}", path))?;

        Ok(())
    }

    /// Append content at the end of a file, creating it (and its parents) if absent
    ///
    /// Returns the length of the file before the append.
    pub fn append_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<u64> {
        let path = path.as_ref();

        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)?;
        }

        // Open file in append mode, create if it doesn't exist
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open file for append: {:?}", path))?;

        let previous_len = file.metadata()
            .with_context(|| format!("Failed to stat file: {:?}", path))?
            .len();

        append_or_restore(&mut file, previous_len, content.as_bytes())
            .with_context(|| format!("Failed to append to file: {:?}", path))?;

        Ok(previous_len)
    }

    /// Cut a file back to `len` bytes
    pub fn truncate_to<P: AsRef<Path>>(path: P, len: u64) -> Result<()> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .write(true)
            .open(path)
            .with_context(|| format!("Failed to open file for truncation: {:?}", path))?;
        file.set_len(len)
            .with_context(|| format!("Failed to truncate file: {:?}", path))?;
        Ok(())
    }
}

/// A writer that can be cut back to an earlier length
pub(crate) trait Truncate {
    fn truncate(&mut self, len: u64) -> io::Result<()>;
}

impl Truncate for File {
    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

/// Write all of `content`, or cut the writer back to `previous_len` on failure
///
/// A short write leaves no partial bytes behind. The write error is returned
/// even when the cut itself fails.
pub(crate) fn append_or_restore<W: Write + Truncate>(
    writer: &mut W,
    previous_len: u64,
    content: &[u8],
) -> io::Result<()> {
    let result = writer.write_all(content).and_then(|_| writer.flush());

    if let Err(e) = result {
        if let Err(truncate_error) = writer.truncate(previous_len) {
            log::error!("Could not remove partial append: {}", truncate_error);
        }
        return Err(e);
    }

    Ok(())
}
