use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// List the names of the immediate subdirectories of `dir`.
/// Files and other entry kinds are ignored.
pub fn list_subdirectories<P: AsRef<Path>>(dir: P) -> Result<Vec<OsString>> {
    let dir_path = dir.as_ref();

    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory: {:?}", dir_path))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in: {:?}", dir_path))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat: {:?}", entry.path()))?;

        if file_type.is_dir() {
            names.push(entry.file_name());
        }
    }

    Ok(names)
}

/// Recursively copy the directory tree at `source` to `destination`.
///
/// The destination must not exist yet: the copy never merges into an
/// existing target, so a leftover file or directory at the exact target
/// path is an error.
pub fn copy_dir_recursive<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
) -> Result<()> {
    let src_path = source.as_ref();
    let dest_path = destination.as_ref();

    if dest_path.exists() {
        anyhow::bail!("Copy target already exists: {:?}", dest_path);
    }

    fs::create_dir_all(dest_path)
        .with_context(|| format!("Failed to create directory: {:?}", dest_path))?;

    for entry in fs::read_dir(src_path)
        .with_context(|| format!("Failed to read directory: {:?}", src_path))?
    {
        let entry =
            entry.with_context(|| format!("Failed to read entry in: {:?}", src_path))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat: {:?}", entry.path()))?;
        let target = dest_path.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_recursive(entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!("Failed to copy file from {:?} to {:?}", entry.path(), target)
            })?;
        }
    }

    Ok(())
}
