//! Main application state and logic.

mod constants;
pub mod input;
mod render;
pub mod state;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, warn};

use dlmv_core::{CloneTarget, Cloner, GitCloner, NavError, ViewportModel, resolve_dir};

use crate::TuiConfig;
use crate::event::KeyAction;
use crate::theme::Theme;

use self::constants::{MESSAGE_TTL_MS, TICK_INTERVAL_MS};
use self::input::{InputResult, InputState};
use self::render::{RenderContext, render_app};
use self::state::{AppMode, StatusMessage};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// The navigation controller: owns the viewport model and maps key actions to
/// transitions. All shared state is passed explicitly; every per-keystroke
/// error is converted into a transient message at this boundary.
pub struct App {
    /// The navigation state.
    model: ViewportModel,
    /// Current mode.
    mode: AppMode,
    /// Color theme.
    theme: Theme,
    /// Clone source configured at startup; `None` leaves the clone key inert.
    clone_target: Option<CloneTarget>,
    /// External clone collaborator.
    cloner: Box<dyn Cloner>,
    /// Text input state while the custom-path prompt is open.
    input: Option<InputState>,
    /// Transient message, auto-dismissed after a TTL.
    message: Option<StatusMessage>,
    /// Flag indicating the UI needs a redraw.
    needs_redraw: bool,
}

impl App {
    /// Create an application browsing `path` with default configuration.
    pub fn new(path: PathBuf) -> AppResult<Self> {
        Self::with_config(path, TuiConfig::default())
    }

    /// Create an application with the given configuration, cloning via git.
    pub fn with_config(path: PathBuf, config: TuiConfig) -> AppResult<Self> {
        Self::with_cloner(path, config, Box::new(GitCloner::new()))
    }

    /// Create an application with an explicit clone collaborator.
    pub fn with_cloner(
        path: PathBuf,
        config: TuiConfig,
        cloner: Box<dyn Cloner>,
    ) -> AppResult<Self> {
        let model = ViewportModel::new(path)?;
        Ok(Self {
            model,
            mode: AppMode::default(),
            theme: Theme::default(),
            clone_target: config.clone_target,
            cloner,
            input: None,
            message: None,
            needs_redraw: true,
        })
    }

    /// The viewport model.
    pub fn model(&self) -> &ViewportModel {
        &self.model
    }

    /// Current mode.
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Current transient message, if any.
    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// Run the event loop: render, wait for input, apply one transition.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        let size = terminal.size()?;
        self.model.set_viewport(size.width, size.height);

        while self.mode != AppMode::Quit {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                        self.needs_redraw = true;

                        // A requested clone runs with the banner on screen;
                        // the interface accepts no input until it returns.
                        if self.mode == AppMode::Cloning {
                            terminal.draw(|frame| self.render(frame))?;
                            self.run_pending_clone();
                        }
                    }
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height);
                        self.needs_redraw = true;
                    }
                    _ => {}
                }
            }

            if self.expire_message() {
                self.needs_redraw = true;
            }
        }

        Ok(())
    }

    /// Dispatch a key event according to the current mode.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::PathInput => self.handle_path_input(key),
            AppMode::Help => match KeyAction::from_key_event(key) {
                KeyAction::Quit | KeyAction::ForceQuit => self.mode = AppMode::Quit,
                KeyAction::ToggleHelp | KeyAction::Cancel => self.mode = AppMode::Normal,
                _ => {}
            },
            AppMode::Cloning | AppMode::Quit => {}
            AppMode::Normal => {
                let action = KeyAction::from_key_event(key);
                self.handle_action(action);
            }
        }
    }

    /// Apply one navigation action. The complete transition table lives here,
    /// as an explicit match over the tagged action type.
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::MoveUp => self.model.move_up(),
            KeyAction::MoveDown => self.model.move_down(),
            KeyAction::JumpToTop => self.model.jump_to_top(),
            KeyAction::JumpToBottom => self.model.jump_to_bottom(),
            KeyAction::PageUp => self.model.page_up(),
            KeyAction::PageDown => self.model.page_down(),

            KeyAction::OpenEntry => {
                if let Err(err) = self.model.open_selected() {
                    self.report_nav_error(err);
                }
            }
            KeyAction::NavigateBack => {
                if let Err(err) = self.model.go_back() {
                    self.report_nav_error(err);
                }
            }
            KeyAction::Refresh => {
                if let Err(err) = self.model.refresh() {
                    self.report_nav_error(err);
                }
            }

            KeyAction::CustomPath => {
                self.input = Some(InputState::new());
                self.mode = AppMode::PathInput;
            }

            KeyAction::Clone => {
                if self.clone_target.is_some() {
                    self.mode = AppMode::Cloning;
                } else {
                    debug!("clone requested but no clone target configured");
                }
            }

            KeyAction::ToggleHelp => self.mode = AppMode::Help,
            KeyAction::ToggleTheme => self.theme = self.theme.toggle(),
            KeyAction::Cancel => self.message = None,

            KeyAction::Quit | KeyAction::ForceQuit => self.mode = AppMode::Quit,
            KeyAction::None => {}
        }
    }

    /// Run the clone requested by [`KeyAction::Clone`]. Blocking; the loop
    /// shows the banner before calling this.
    pub fn run_pending_clone(&mut self) {
        if self.mode != AppMode::Cloning {
            return;
        }
        self.mode = AppMode::Normal;
        self.needs_redraw = true;

        let Some(target) = &self.clone_target else {
            return;
        };
        let request = target.request_for(self.model.current_path().to_path_buf());

        match self.cloner.clone_into(&request) {
            Ok(checkout) => {
                self.message = Some(StatusMessage::info(format!(
                    "Cloned into {}",
                    checkout.display()
                )));
                // The checkout directory should appear in the listing
                if let Err(err) = self.model.refresh() {
                    self.report_nav_error(err);
                }
            }
            Err(err) => {
                warn!(%err, "clone failed");
                self.message = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    /// Apply a terminal resize.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.model.set_viewport(width, height);
    }

    /// Drop the transient message once its TTL has elapsed.
    pub fn expire_message(&mut self) -> bool {
        let ttl = Duration::from_millis(MESSAGE_TTL_MS);
        if self.message.as_ref().is_some_and(|m| m.is_expired(ttl)) {
            self.message = None;
            return true;
        }
        false
    }

    fn handle_path_input(&mut self, key: KeyEvent) {
        let Some(input) = self.input.as_mut() else {
            self.mode = AppMode::Normal;
            return;
        };

        match input.handle_key(key) {
            InputResult::Continue => {}
            InputResult::Cancel => {
                self.input = None;
                self.mode = AppMode::Normal;
            }
            InputResult::Submit(raw) => {
                self.input = None;
                self.mode = AppMode::Normal;
                self.commit_custom_path(&raw);
            }
        }
    }

    /// Validate a custom path and commit it; on any failure the navigation
    /// state is left untouched and a transient message is shown.
    fn commit_custom_path(&mut self, raw: &str) {
        match resolve_dir(raw) {
            Ok(path) => {
                if let Err(err) = self.model.set_path(path) {
                    self.report_nav_error(err);
                }
            }
            Err(err) => self.report_nav_error(err),
        }
    }

    fn report_nav_error(&mut self, err: NavError) {
        warn!(%err, "recovered navigation error");
        self.message = Some(StatusMessage::error(err.to_string()));
    }

    fn render(&self, frame: &mut Frame) {
        let ctx = RenderContext {
            theme: &self.theme,
            mode: self.mode,
            model: &self.model,
            message: self.message.as_ref(),
            input: self.input.as_ref(),
            clone_source: self.clone_target.as_ref().map(|t| t.source.as_str()),
        };
        render_app(&ctx, frame.area(), frame.buffer_mut());
    }
}
