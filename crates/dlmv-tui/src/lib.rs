//! Terminal user interface for dlmv.
//!
//! A single-threaded, synchronous navigator: one render, one blocking wait
//! for input, one transition. Built with ratatui.
//!
//! # Keyboard
//!
//! - `j`/`k`, arrows - Move down/up
//! - `l`/`→`/`Enter` - Open the selected directory
//! - `h`/`←`/`Backspace` - Parent directory
//! - `g`/`G` - Jump to top/bottom
//! - `Ctrl-u`/`Ctrl-d` - Page up/down
//! - `p` - Enter a custom path (tilde expansion supported)
//! - `c` - Clone the configured repository into the current directory
//! - `R` - Re-read the current directory
//! - `?` - Help
//! - `q` - Quit

pub mod app;
pub mod event;
mod theme;

pub use app::{App, AppResult};
pub use event::KeyAction;
pub use theme::Theme;

use dlmv_core::CloneTarget;

/// Configuration for the TUI, assembled by the CLI.
#[derive(Debug, Clone, Default)]
pub struct TuiConfig {
    /// Clone source armed at startup; `None` leaves the `c` key inert.
    pub clone_target: Option<CloneTarget>,
}

impl TuiConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clone target.
    pub fn with_clone_target(mut self, clone_target: Option<CloneTarget>) -> Self {
        self.clone_target = clone_target;
        self
    }
}

/// Run the TUI application, restoring the terminal on every exit path.
pub fn run_with_config(path: std::path::PathBuf, config: TuiConfig) -> AppResult<()> {
    let terminal = ratatui::init();
    let result = App::with_config(path, config).and_then(|app| app.run(terminal));
    ratatui::restore();
    result
}
