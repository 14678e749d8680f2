//! Core navigation types for dlmv.
//!
//! This crate provides the navigation domain used by the TUI: directory
//! entries, the viewport model (selection, scroll, geometry), custom-path
//! validation, and the external clone collaborator.

mod clone;
mod entry;
mod error;
mod path;
mod viewport;

pub use clone::{CloneRequest, CloneTarget, Cloner, GitCloner, repo_dir_name};
pub use entry::{Entry, read_entries};
pub use error::{CloneError, NavError};
pub use path::{expand_tilde, resolve_dir};
pub use viewport::{CHROME_ROWS, MIN_VIEWPORT_HEIGHT, MIN_VIEWPORT_WIDTH, ViewportModel};
