//! External clone collaborator.
//!
//! Cloning is delegated to a child `git clone` process. The navigator only
//! decides *where* the clone lands: the destination is always the directory
//! being browsed at the moment the clone is requested.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use crate::error::CloneError;

/// A clone source configured at startup (`--clone`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneTarget {
    /// Repository source reference (URL or scp-style path).
    pub source: String,
    /// Pass-through options for the clone command.
    pub options: Vec<String>,
}

impl CloneTarget {
    /// Create a new clone target.
    pub fn new(source: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            source: source.into(),
            options,
        }
    }

    /// Build the request for cloning into `dest`.
    pub fn request_for(&self, dest: PathBuf) -> CloneRequest {
        CloneRequest {
            source: self.source.clone(),
            options: self.options.clone(),
            dest,
        }
    }
}

/// One clone invocation: source, options, and the destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRequest {
    pub source: String,
    pub options: Vec<String>,
    /// Directory the checkout is placed under (the navigator's current path).
    pub dest: PathBuf,
}

impl CloneRequest {
    /// Final checkout directory: `dest/<repo name>`.
    pub fn checkout_dir(&self) -> Result<PathBuf, CloneError> {
        let name = repo_dir_name(&self.source).ok_or_else(|| CloneError::BadSource {
            reference: self.source.clone(),
        })?;
        Ok(self.dest.join(name))
    }
}

/// Derive the checkout directory name from a source reference.
///
/// Takes the last path segment (after `/` or the scp-style `:`) and strips a
/// single trailing `.git` suffix: `https://host/group/name.git` -> `name`,
/// `git@host:group/my.repo.git` -> `my.repo`.
pub fn repo_dir_name(source: &str) -> Option<String> {
    let trimmed = source.trim().trim_end_matches('/');
    let segment = trimmed
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(trimmed);
    let name = segment.strip_suffix(".git").unwrap_or(segment);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// The external clone capability.
///
/// Injected into the controller as an optional reference; tests substitute a
/// fake implementation.
pub trait Cloner {
    /// Perform the clone, returning the final checkout directory.
    fn clone_into(&self, request: &CloneRequest) -> Result<PathBuf, CloneError>;
}

/// Clones by running `git clone [options..] <source> <checkout dir>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCloner;

impl GitCloner {
    /// Create a new git-backed cloner.
    pub fn new() -> Self {
        Self
    }
}

impl Cloner for GitCloner {
    fn clone_into(&self, request: &CloneRequest) -> Result<PathBuf, CloneError> {
        let checkout = request.checkout_dir()?;

        debug!(
            source = %request.source,
            dest = %checkout.display(),
            "running git clone"
        );

        let output = Command::new("git")
            .arg("clone")
            .args(&request.options)
            .arg(&request.source)
            .arg(&checkout)
            .output()
            .map_err(|e| CloneError::Spawn {
                command: "git clone".into(),
                source: e,
            })?;

        if !output.status.success() {
            let message = String::from_utf8_lossy(&output.stderr)
                .lines()
                .last()
                .unwrap_or("unknown error")
                .to_string();
            warn!(code = ?output.status.code(), %message, "git clone failed");
            return Err(CloneError::Failed {
                code: output.status.code(),
                message,
            });
        }

        Ok(checkout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_dir_name_url_forms() {
        assert_eq!(
            repo_dir_name("https://host/group/project.git").as_deref(),
            Some("project")
        );
        assert_eq!(
            repo_dir_name("https://host/group/project").as_deref(),
            Some("project")
        );
        assert_eq!(
            repo_dir_name("https://host/group/project/").as_deref(),
            Some("project")
        );
    }

    #[test]
    fn test_repo_dir_name_scp_style() {
        assert_eq!(
            repo_dir_name("git@host:group/name.git").as_deref(),
            Some("name")
        );
        assert_eq!(repo_dir_name("git@host:name.git").as_deref(), Some("name"));
    }

    #[test]
    fn test_repo_dir_name_keeps_inner_dots() {
        // Only the trailing .git is an extension-like suffix
        assert_eq!(
            repo_dir_name("https://host/group/my.repo.git").as_deref(),
            Some("my.repo")
        );
    }

    #[test]
    fn test_repo_dir_name_degenerate() {
        assert_eq!(repo_dir_name(""), None);
        assert_eq!(repo_dir_name("///"), None);
        assert_eq!(repo_dir_name(".git"), None);
    }

    #[test]
    fn test_checkout_dir_joins_destination() {
        let target = CloneTarget::new("https://host/group/project.git", vec![]);
        let request = target.request_for(PathBuf::from("/home/user/downloads"));
        assert_eq!(
            request.checkout_dir().unwrap(),
            PathBuf::from("/home/user/downloads/project")
        );
    }

    #[test]
    fn test_checkout_dir_bad_source() {
        let request = CloneRequest {
            source: "///".into(),
            options: vec![],
            dest: PathBuf::from("/tmp"),
        };
        assert!(matches!(
            request.checkout_dir(),
            Err(CloneError::BadSource { .. })
        ));
    }
}
