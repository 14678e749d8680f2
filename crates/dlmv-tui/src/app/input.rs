//! Input state for the custom-path prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// State for line-oriented text input.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// The current input buffer.
    buffer: String,
    /// Cursor position within the buffer.
    cursor: usize,
}

impl InputState {
    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current buffer contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Get the cursor position (a byte offset, always on a char boundary).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Start of the character before the cursor.
    fn prev_char_start(&self) -> usize {
        self.buffer[..self.cursor]
            .chars()
            .next_back()
            .map(|c| self.cursor - c.len_utf8())
            .unwrap_or(0)
    }

    /// End of the character at the cursor.
    fn next_char_end(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputResult {
        match (key.code, key.modifiers) {
            // Submit
            (KeyCode::Enter, _) => InputResult::Submit(self.buffer.clone()),

            // Cancel
            (KeyCode::Esc, _) => InputResult::Cancel,

            // Backspace - delete character before cursor
            (KeyCode::Backspace, _) => {
                if self.cursor > 0 {
                    self.cursor = self.prev_char_start();
                    self.buffer.remove(self.cursor);
                }
                InputResult::Continue
            }

            // Delete - delete character at cursor
            (KeyCode::Delete, _) => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                }
                InputResult::Continue
            }

            (KeyCode::Left, _) => {
                self.cursor = self.prev_char_start();
                InputResult::Continue
            }

            (KeyCode::Right, _) => {
                self.cursor = self.next_char_end();
                InputResult::Continue
            }

            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
                InputResult::Continue
            }

            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor = self.buffer.len();
                InputResult::Continue
            }

            // Ctrl-U - clear line
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.buffer.clear();
                self.cursor = 0;
                InputResult::Continue
            }

            // Ctrl-K - delete from cursor to end
            (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
                self.buffer.truncate(self.cursor);
                InputResult::Continue
            }

            // Ctrl-W - delete word before cursor
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                if self.cursor > 0 {
                    let before = &self.buffer[..self.cursor];
                    let word_start = before
                        .char_indices()
                        .rev()
                        .find(|(_, c)| c.is_whitespace() || *c == '/')
                        .map(|(i, c)| i + c.len_utf8())
                        .unwrap_or(0);
                    self.buffer.replace_range(word_start..self.cursor, "");
                    self.cursor = word_start;
                }
                InputResult::Continue
            }

            // Regular character input
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.buffer.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                InputResult::Continue
            }

            // Ignore other keys
            _ => InputResult::Continue,
        }
    }
}

/// Result of handling input.
#[derive(Debug, Clone)]
pub enum InputResult {
    /// Continue accepting input.
    Continue,
    /// User cancelled the prompt.
    Cancel,
    /// User submitted the prompt with this value.
    Submit(String),
}
