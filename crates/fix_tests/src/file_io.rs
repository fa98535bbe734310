// crates/fix_tests/src/file_io.rs

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads the whole file as UTF-8 text.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("Error reading file {}", path.display()))
}

/// Replaces the file's content by writing a sibling temp file and renaming it over `path`.
/// A symlinked `path` is followed, so the link target is what gets replaced.
/// If anything fails before the rename, the temp file is dropped and `path` is left as it was.
pub fn write_document_atomic<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(err) if err.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to resolve {}", path.display()))
        }
    };
    let parent_dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in {}", parent_dir.display()))?;
    temp_file
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write temp file for {}", target.display()))?;
    temp_file
        .flush()
        .with_context(|| "Failed to flush temp file")?;

    match fs::metadata(&target) {
        // Keep the original mode; tempfile creates files as 0600.
        Ok(metadata) => fs::set_permissions(temp_file.path(), metadata.permissions())
            .with_context(|| format!("Failed to copy permissions of {}", target.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to stat {}", target.display()))
        }
    }

    temp_file
        .persist(&target)
        .with_context(|| format!("Failed to persist temp file to {}", target.display()))?;
    Ok(())
}
