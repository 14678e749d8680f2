use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use dlmv_core::{CloneError, CloneRequest, CloneTarget, Cloner};
use dlmv_tui::app::state::{AppMode, MessageLevel};
use dlmv_tui::{App, KeyAction, TuiConfig};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

/// Fake collaborator that records requests and materializes the checkout
/// directory, like a real clone would.
struct FakeCloner {
    seen: Rc<RefCell<Vec<CloneRequest>>>,
    fail_with: Option<String>,
}

impl Cloner for FakeCloner {
    fn clone_into(&self, request: &CloneRequest) -> Result<PathBuf, CloneError> {
        self.seen.borrow_mut().push(request.clone());
        if let Some(message) = &self.fail_with {
            return Err(CloneError::Failed {
                code: Some(128),
                message: message.clone(),
            });
        }
        let checkout = request.checkout_dir()?;
        fs::create_dir_all(&checkout).unwrap();
        Ok(checkout)
    }
}

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("projects")).unwrap();
    fs::write(dir.path().join("notes.txt"), b"").unwrap();
    dir
}

fn app_with_cloner(
    root: PathBuf,
    target: Option<CloneTarget>,
    fail_with: Option<String>,
) -> (App, Rc<RefCell<Vec<CloneRequest>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let cloner = FakeCloner {
        seen: Rc::clone(&seen),
        fail_with,
    };
    let config = TuiConfig::new().with_clone_target(target);
    let mut app = App::with_cloner(root, config, Box::new(cloner)).unwrap();
    app.handle_resize(80, 24);
    (app, seen)
}

#[test]
fn test_clone_lands_in_current_directory() {
    let dir = fixture();
    let target = CloneTarget::new("https://host/group/project.git", vec![]);
    let (mut app, seen) = app_with_cloner(dir.path().to_path_buf(), Some(target), None);

    // Drill into projects/ first; the destination must follow
    app.handle_action(KeyAction::OpenEntry);
    assert_eq!(app.model().current_path(), dir.path().join("projects"));

    app.handle_action(KeyAction::Clone);
    assert_eq!(app.mode(), AppMode::Cloning);
    app.run_pending_clone();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].dest, dir.path().join("projects"));

    // Post-clone refresh shows the new checkout
    assert_eq!(app.mode(), AppMode::Normal);
    assert!(app.model().entries().iter().any(|e| e.name == "project" && e.is_dir));

    let message = app.message().unwrap();
    assert_eq!(message.level, MessageLevel::Info);
    assert!(message.text.contains("project"));
}

#[test]
fn test_clone_without_target_is_noop() {
    let dir = fixture();
    let (mut app, seen) = app_with_cloner(dir.path().to_path_buf(), None, None);

    app.handle_action(KeyAction::Clone);
    assert_eq!(app.mode(), AppMode::Normal);
    app.run_pending_clone();
    assert!(seen.borrow().is_empty());
    assert!(app.message().is_none());
}

#[test]
fn test_clone_failure_is_transient_and_recoverable() {
    let dir = fixture();
    let target = CloneTarget::new("https://host/group/project.git", vec![]);
    let (mut app, _) = app_with_cloner(
        dir.path().to_path_buf(),
        Some(target),
        Some("repository not found".into()),
    );

    app.handle_action(KeyAction::Clone);
    app.run_pending_clone();

    let message = app.message().unwrap();
    assert_eq!(message.level, MessageLevel::Error);
    assert!(message.text.contains("repository not found"));

    // Navigation still works afterwards
    assert_eq!(app.mode(), AppMode::Normal);
    app.handle_action(KeyAction::MoveDown);
    assert_eq!(app.model().selected(), 1);
}

#[test]
fn test_custom_path_valid_commits_and_resets() {
    let dir = fixture();
    let (mut app, _) = app_with_cloner(dir.path().to_path_buf(), None, None);
    app.handle_action(KeyAction::MoveDown);

    app.handle_action(KeyAction::CustomPath);
    assert_eq!(app.mode(), AppMode::PathInput);

    let sub = dir.path().join("projects");
    type_str(&mut app, sub.to_str().unwrap());
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.mode(), AppMode::Normal);
    assert_eq!(app.model().current_path(), sub);
    assert_eq!(app.model().selected(), 0);
    assert_eq!(app.model().scroll_offset(), 0);
}

#[test]
fn test_custom_path_invalid_leaves_state_unchanged() {
    let dir = fixture();
    let (mut app, _) = app_with_cloner(dir.path().to_path_buf(), None, None);
    app.handle_action(KeyAction::MoveDown);
    let selected_before = app.model().selected();

    app.handle_action(KeyAction::CustomPath);
    type_str(&mut app, "/definitely/not/a/real/dir");
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.mode(), AppMode::Normal);
    assert_eq!(app.model().current_path(), dir.path());
    assert_eq!(app.model().selected(), selected_before);

    let message = app.message().unwrap();
    assert_eq!(message.level, MessageLevel::Error);
}

#[test]
fn test_custom_path_cancel_discards_input() {
    let dir = fixture();
    let (mut app, _) = app_with_cloner(dir.path().to_path_buf(), None, None);

    app.handle_action(KeyAction::CustomPath);
    type_str(&mut app, "/tmp");
    app.handle_key(key(KeyCode::Esc));

    assert_eq!(app.mode(), AppMode::Normal);
    assert_eq!(app.model().current_path(), dir.path());
    assert!(app.message().is_none());
}

#[test]
fn test_resize_below_minimum_keeps_selection() {
    let dir = fixture();
    let (mut app, _) = app_with_cloner(dir.path().to_path_buf(), None, None);
    app.handle_action(KeyAction::MoveDown);

    app.handle_resize(15, 3);
    assert!(app.model().is_viewport_too_small());
    assert_eq!(app.model().selected(), 1);
    assert_eq!(app.model().scroll_offset(), 0);

    app.handle_resize(80, 24);
    assert!(!app.model().is_viewport_too_small());
    assert_eq!(app.model().selected(), 1);
}

#[test]
fn test_open_file_entry_is_noop() {
    let dir = fixture();
    let (mut app, _) = app_with_cloner(dir.path().to_path_buf(), None, None);

    // "notes.txt" sorts after the directory
    app.handle_action(KeyAction::JumpToBottom);
    app.handle_action(KeyAction::OpenEntry);
    assert_eq!(app.model().current_path(), dir.path());
}

#[test]
fn test_quit_and_help_modes() {
    let dir = fixture();
    let (mut app, _) = app_with_cloner(dir.path().to_path_buf(), None, None);

    app.handle_key(key(KeyCode::Char('?')));
    assert_eq!(app.mode(), AppMode::Help);

    // Navigation keys are inert inside help
    app.handle_key(key(KeyCode::Char('j')));
    assert_eq!(app.model().selected(), 0);

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.mode(), AppMode::Normal);

    app.handle_key(key(KeyCode::Char('q')));
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_unknown_key_is_ignored() {
    let dir = fixture();
    let (mut app, _) = app_with_cloner(dir.path().to_path_buf(), None, None);

    app.handle_key(key(KeyCode::Char('z')));
    assert_eq!(app.mode(), AppMode::Normal);
    assert_eq!(app.model().selected(), 0);
    assert!(app.message().is_none());
}
