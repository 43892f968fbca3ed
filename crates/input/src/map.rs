//! Key mapping from terminal events to runner actions.

use crate::types::RunnerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to a runner action.
pub fn action_for_key(key: KeyEvent) -> Option<RunnerAction> {
    if should_quit(key) {
        return Some(RunnerAction::Quit);
    }
    match key.code {
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(RunnerAction::Jump),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Raw mode swallows the interrupt signal, so Ctrl-C arrives as a key.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
