//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,
    PageUp,
    PageDown,

    // Directory navigation
    OpenEntry,
    NavigateBack,

    /// Prompt for a custom destination path.
    CustomPath,

    /// Clone the configured repository into the current directory.
    Clone,

    /// Re-read the current directory.
    Refresh,

    // UI toggles
    ToggleHelp,
    ToggleTheme,

    /// Dismiss overlays/messages.
    Cancel,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action. Unknown keys map to `None`.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,
            (KeyCode::Esc, _) => KeyAction::Cancel,

            // Navigation - vim style
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,
            (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::NavigateBack,
            (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::OpenEntry,

            // Navigation - arrow keys
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,
            (KeyCode::Left, _) => KeyAction::NavigateBack,
            (KeyCode::Right, _) => KeyAction::OpenEntry,
            (KeyCode::Enter, _) => KeyAction::OpenEntry,
            (KeyCode::Backspace, _) => KeyAction::NavigateBack,

            // Jump
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToBottom,
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,

            // Page navigation
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::PageUp,
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => KeyAction::PageDown,

            // Tool actions
            (KeyCode::Char('c'), KeyModifiers::NONE) => KeyAction::Clone,
            (KeyCode::Char('p'), KeyModifiers::NONE) => KeyAction::CustomPath,
            (KeyCode::Char('R'), KeyModifiers::SHIFT) => KeyAction::Refresh,

            // UI toggles
            (KeyCode::Char('?'), KeyModifiers::NONE) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,

            _ => KeyAction::None,
        }
    }
}

/// A section of key bindings for the help overlay.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// All key bindings organized by section for the help overlay.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Navigation",
            bindings: vec![
                KeyBinding { keys: "j/k ↑/↓", description: "Move down/up" },
                KeyBinding { keys: "l/→/Enter", description: "Open directory" },
                KeyBinding { keys: "h/←/Bksp", description: "Parent directory" },
                KeyBinding { keys: "g/G", description: "Jump to top/bottom" },
                KeyBinding { keys: "Ctrl-u/d", description: "Page up/down" },
            ],
        },
        HelpSection {
            title: "Actions",
            bindings: vec![
                KeyBinding { keys: "p", description: "Enter a custom path" },
                KeyBinding { keys: "c", description: "Clone repo here (when armed)" },
                KeyBinding { keys: "R", description: "Refresh listing" },
            ],
        },
        HelpSection {
            title: "Interface",
            bindings: vec![
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "q", description: "Quit" },
            ],
        },
    ]
}

/// Compact legend for the footer. The clone binding is only advertised when a
/// clone target was configured.
pub fn legend(clone_armed: bool) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![
        ("h←", "parent"),
        ("l→", "open"),
        ("jk↑↓", "move"),
        ("p", "path"),
    ];
    if clone_armed {
        items.push(("c", "clone"));
    }
    items.push(("?", "help"));
    items.push(("q", "quit"));
    items
}
