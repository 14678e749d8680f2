//! Custom-path expansion and validation.

use std::path::{Path, PathBuf};

use crate::error::NavError;

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Inputs without a tilde pass through unchanged, as do `~user` forms
/// (which this tool does not resolve).
pub fn expand_tilde(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

/// Expand a user-supplied path and require it to be an existing directory.
pub fn resolve_dir(input: &str) -> Result<PathBuf, NavError> {
    let expanded = expand_tilde(input.trim());

    if !expanded.exists() {
        return Err(NavError::NotFound { path: expanded });
    }
    if !expanded.is_dir() {
        return Err(NavError::NotADirectory { path: expanded });
    }

    Ok(expanded)
}

/// Parent of a path, or `None` at the filesystem root.
pub(crate) fn parent_of(path: &Path) -> Option<PathBuf> {
    path.parent().map(Path::to_path_buf)
}
