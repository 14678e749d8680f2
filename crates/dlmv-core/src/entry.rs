//! Directory entries and listing.

use std::fs;
use std::path::Path;

use crate::error::NavError;

/// A single name within a directory listing, tagged as directory or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File name (no path components).
    pub name: String,
    /// Whether the entry is a directory (follows symlinks).
    pub is_dir: bool,
}

impl Entry {
    /// Create a new entry.
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }
}

/// Read the entries of a directory, sorted directories-first and then
/// case-insensitively by name.
///
/// Entries whose metadata cannot be read are still listed (as non-directories)
/// rather than dropped, so a single unreadable entry never hides the rest.
pub fn read_entries(path: &Path) -> Result<Vec<Entry>, NavError> {
    let reader = fs::read_dir(path).map_err(|e| NavError::io(path, e))?;

    let mut entries = Vec::new();
    for dirent in reader {
        let dirent = dirent.map_err(|e| NavError::io(path, e))?;
        let name = dirent.file_name().to_string_lossy().into_owned();
        // metadata() follows symlinks, so a symlink to a directory is openable
        let is_dir = dirent
            .path()
            .metadata()
            .map(|m| m.is_dir())
            .unwrap_or(false);
        entries.push(Entry::new(name, is_dir));
    }

    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    Ok(entries)
}
