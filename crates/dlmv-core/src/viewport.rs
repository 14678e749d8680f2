//! The viewport model: current directory, entry list, selection and scroll.
//!
//! The model is a pure state holder. It never draws anything; the TUI crate
//! projects it onto the screen. All transitions keep two invariants:
//!
//! - `scroll_offset <= selected < scroll_offset + list_rows` when entries are
//!   non-empty and the viewport has rows (the selection is always visible),
//! - `scroll_offset <= max(0, entries.len() - list_rows)`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::entry::{Entry, read_entries};
use crate::error::NavError;
use crate::path::parent_of;

/// Rows of the terminal consumed by header, borders and legend.
pub const CHROME_ROWS: u16 = 4;

/// Minimum terminal height for a usable interface.
pub const MIN_VIEWPORT_HEIGHT: u16 = 4;

/// Minimum terminal width for a usable interface.
pub const MIN_VIEWPORT_WIDTH: u16 = 20;

/// State holder for the file navigator.
#[derive(Debug, Clone)]
pub struct ViewportModel {
    /// Absolute path currently being browsed. Only mutated by a successful
    /// navigation; never invalid mid-operation.
    current_path: PathBuf,
    /// Sorted entries of `current_path`.
    entries: Vec<Entry>,
    /// Selected index, within `[0, entries.len() - 1]` for non-empty listings.
    selected: usize,
    /// Index of the first visible entry.
    scroll_offset: usize,
    /// Terminal width in columns.
    viewport_width: u16,
    /// Terminal height in rows.
    viewport_height: u16,
}

impl ViewportModel {
    /// Create a model rooted at `path`, reading its listing immediately.
    ///
    /// Geometry starts at zero; callers set it from the terminal before the
    /// first render.
    pub fn new(path: PathBuf) -> Result<Self, NavError> {
        let entries = read_entries(&path)?;
        Ok(Self {
            current_path: path,
            entries,
            selected: 0,
            scroll_offset: 0,
            viewport_width: 0,
            viewport_height: 0,
        })
    }

    /// The directory currently being browsed.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// All entries of the current directory.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Selected index into `entries`.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the first visible entry.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// The entry under the cursor, if the listing is non-empty.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected)
    }

    /// Terminal width last reported via [`set_viewport`](Self::set_viewport).
    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    /// Terminal height last reported via [`set_viewport`](Self::set_viewport).
    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Number of entry rows the viewport can display.
    pub fn list_rows(&self) -> usize {
        usize::from(self.viewport_height.saturating_sub(CHROME_ROWS))
    }

    /// True when the terminal is too small to render the interface.
    pub fn is_viewport_too_small(&self) -> bool {
        self.viewport_height < MIN_VIEWPORT_HEIGHT || self.viewport_width < MIN_VIEWPORT_WIDTH
    }

    /// Update geometry from the terminal and re-clamp the scroll offset.
    ///
    /// The selection itself is never moved by a resize.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.clamp_scroll();
    }

    /// The slice of entries currently visible. Pure; repeated calls without an
    /// intervening transition return identical results.
    pub fn visible_slice(&self) -> &[Entry] {
        let start = self.scroll_offset.min(self.entries.len());
        let end = (start + self.list_rows()).min(self.entries.len());
        &self.entries[start..end]
    }

    /// Move the selection up one entry; no-op at the top.
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.clamp_scroll();
        }
    }

    /// Move the selection down one entry; no-op at the bottom.
    pub fn move_down(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
            self.clamp_scroll();
        }
    }

    /// Jump to the first entry.
    pub fn jump_to_top(&mut self) {
        self.selected = 0;
        self.clamp_scroll();
    }

    /// Jump to the last entry.
    pub fn jump_to_bottom(&mut self) {
        self.selected = self.entries.len().saturating_sub(1);
        self.clamp_scroll();
    }

    /// Move the selection up by one viewport worth of rows.
    pub fn page_up(&mut self) {
        let step = self.list_rows().max(1);
        self.selected = self.selected.saturating_sub(step);
        self.clamp_scroll();
    }

    /// Move the selection down by one viewport worth of rows.
    pub fn page_down(&mut self) {
        let step = self.list_rows().max(1);
        let max = self.entries.len().saturating_sub(1);
        self.selected = (self.selected + step).min(max);
        self.clamp_scroll();
    }

    /// Re-read the current directory, keeping the selection clamped.
    ///
    /// On failure the previous listing is kept and the error propagated.
    pub fn refresh(&mut self) -> Result<(), NavError> {
        let entries = read_entries(&self.current_path)?;
        self.entries = entries;
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
        self.clamp_scroll();
        Ok(())
    }

    /// Change to `path`, resetting selection and scroll.
    ///
    /// The new directory is read before anything is committed, so a failed
    /// read leaves the model exactly as it was.
    pub fn set_path(&mut self, path: PathBuf) -> Result<(), NavError> {
        let entries = read_entries(&path)?;
        debug!(path = %path.display(), entries = entries.len(), "changed directory");
        self.current_path = path;
        self.entries = entries;
        self.selected = 0;
        self.scroll_offset = 0;
        Ok(())
    }

    /// Open the selected entry if it is a directory; otherwise a no-op.
    pub fn open_selected(&mut self) -> Result<(), NavError> {
        let Some(entry) = self.selected_entry() else {
            return Ok(());
        };
        if !entry.is_dir {
            return Ok(());
        }
        let target = self.current_path.join(&entry.name);
        self.set_path(target)
    }

    /// Navigate to the parent directory; no-op at the filesystem root.
    pub fn go_back(&mut self) -> Result<(), NavError> {
        match parent_of(&self.current_path) {
            Some(parent) => self.set_path(parent),
            None => Ok(()),
        }
    }

    /// Keep `scroll_offset` within bounds and the selection visible.
    fn clamp_scroll(&mut self) {
        let rows = self.list_rows();
        if rows == 0 {
            return;
        }
        let max_scroll = self.entries.len().saturating_sub(rows);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + rows {
            self.scroll_offset = self.selected + 1 - rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Model over a synthetic listing, bypassing the filesystem.
    fn model_with(entries: Vec<Entry>, width: u16, height: u16) -> ViewportModel {
        let mut model = ViewportModel {
            current_path: PathBuf::from("/synthetic"),
            entries,
            selected: 0,
            scroll_offset: 0,
            viewport_width: 0,
            viewport_height: 0,
        };
        model.set_viewport(width, height);
        model
    }

    fn names(count: usize) -> Vec<Entry> {
        (0..count)
            .map(|i| Entry::new(format!("entry{i:02}"), i % 2 == 0))
            .collect()
    }

    #[test]
    fn test_scroll_follows_selection_down_and_up() {
        // 3 entries, 2 visible rows (height = chrome + 2)
        let mut model = model_with(names(3), 80, CHROME_ROWS + 2);

        model.move_down();
        assert_eq!(model.selected(), 1);
        assert_eq!(model.scroll_offset(), 0);

        model.move_down();
        assert_eq!(model.selected(), 2);
        assert_eq!(model.scroll_offset(), 1);

        model.move_up();
        model.move_up();
        assert_eq!(model.selected(), 0);
        assert_eq!(model.scroll_offset(), 0);
    }

    #[test]
    fn test_boundary_moves_are_noops() {
        let mut model = model_with(names(3), 80, CHROME_ROWS + 2);

        model.move_up();
        assert_eq!(model.selected(), 0);

        model.jump_to_bottom();
        let at_bottom = model.selected();
        model.move_down();
        assert_eq!(model.selected(), at_bottom);
    }

    #[test]
    fn test_empty_listing() {
        let mut model = model_with(Vec::new(), 80, CHROME_ROWS + 5);
        model.move_down();
        model.move_up();
        model.page_down();
        model.jump_to_bottom();
        assert_eq!(model.selected(), 0);
        assert_eq!(model.scroll_offset(), 0);
        assert!(model.visible_slice().is_empty());
        assert!(model.selected_entry().is_none());
    }

    #[test]
    fn test_visible_slice_idempotent() {
        let mut model = model_with(names(10), 80, CHROME_ROWS + 3);
        model.move_down();
        let first: Vec<Entry> = model.visible_slice().to_vec();
        let second: Vec<Entry> = model.visible_slice().to_vec();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_resize_reclamps_scroll_but_not_selection() {
        let mut model = model_with(names(10), 80, CHROME_ROWS + 2);
        model.jump_to_bottom();
        assert_eq!(model.selected(), 9);
        assert_eq!(model.scroll_offset(), 8);

        // Taller viewport: max scroll shrinks, selection stays put
        model.set_viewport(80, CHROME_ROWS + 8);
        assert_eq!(model.selected(), 9);
        assert_eq!(model.scroll_offset(), 2);

        // Too-small viewport: nothing moves
        model.set_viewport(10, 3);
        assert!(model.is_viewport_too_small());
        assert_eq!(model.selected(), 9);
        assert_eq!(model.scroll_offset(), 2);
    }

    #[test]
    fn test_page_motion_invariants() {
        let mut model = model_with(names(25), 80, CHROME_ROWS + 5);
        for _ in 0..10 {
            model.page_down();
            assert_invariants(&model);
        }
        assert_eq!(model.selected(), 24);
        for _ in 0..10 {
            model.page_up();
            assert_invariants(&model);
        }
        assert_eq!(model.selected(), 0);
        assert_eq!(model.scroll_offset(), 0);
    }

    #[test]
    fn test_too_small_thresholds() {
        let mut model = model_with(names(1), 19, 10);
        assert!(model.is_viewport_too_small());
        model.set_viewport(20, 3);
        assert!(model.is_viewport_too_small());
        model.set_viewport(20, 4);
        assert!(!model.is_viewport_too_small());
    }

    fn assert_invariants(model: &ViewportModel) {
        let rows = model.list_rows();
        if rows == 0 || model.entries().is_empty() {
            return;
        }
        let max_scroll = model.entries().len().saturating_sub(rows);
        assert!(model.scroll_offset() <= max_scroll);
        assert!(model.selected() < model.entries().len());
        assert!(model.scroll_offset() <= model.selected());
        assert!(model.selected() < model.scroll_offset() + rows);
    }
}
