use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

/// Trait for types that describe one generated source file.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Render the file and write it under the base directory, returning the
    /// written path.
    ///
    /// Every run fully replaces the previous file.
    fn write(&self, base: &Path) -> io::Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Writes `content` to `path`, creating parent directories as needed.
///
/// The content is staged in a temporary file next to the target and renamed
/// into place, so a failed write never leaves a truncated or half-written
/// file at `path`.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    let mut staged = NamedTempFile::new_in(parent)?;
    staged.write_all(content.as_bytes())?;
    staged.persist(path).map_err(|err| err.error)?;
    Ok(())
}
