//! Keyboard-backed [`InputSource`].
//!
//! Pending terminal events are drained without blocking each time the game
//! polls. A jump key press (or auto-repeat) marks the key held until either a
//! release event arrives or `release_timeout` passes with no further press.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};
use log::warn;

use crate::core::InputSource;
use crate::map::action_for_key;
use crate::types::RunnerAction;

// Longer than a typical auto-repeat interval, shorter than one jump.
const DEFAULT_RELEASE_TIMEOUT: Duration = Duration::from_millis(150);

/// Events drained per poll; anything beyond waits for the next frame.
const MAX_EVENTS_PER_POLL: usize = 32;

/// "Is the key down?" tracking for a terminal that may never report releases.
#[derive(Debug, Clone, Copy)]
pub struct HeldKey {
    last_press: Option<Instant>,
    timeout: Duration,
}

impl HeldKey {
    pub fn new(timeout: Duration) -> Self {
        Self {
            last_press: None,
            timeout,
        }
    }

    pub fn press(&mut self, now: Instant) {
        self.last_press = Some(now);
    }

    pub fn release(&mut self) {
        self.last_press = None;
    }

    pub fn is_held(&self, now: Instant) -> bool {
        self.last_press
            .is_some_and(|t| now.saturating_duration_since(t) <= self.timeout)
    }
}

/// Jump/quit input read from the terminal.
#[derive(Debug)]
pub struct KeyboardInput {
    jump: HeldKey,
    quit: bool,
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::with_release_timeout(DEFAULT_RELEASE_TIMEOUT)
    }

    pub fn with_release_timeout(timeout: Duration) -> Self {
        Self {
            jump: HeldKey::new(timeout),
            quit: false,
        }
    }

    /// Apply one terminal event. Returns the action it mapped to, if any.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> Option<RunnerAction> {
        let Event::Key(key) = event else {
            return None;
        };
        let action = action_for_key(*key)?;

        match (action, key.kind) {
            (RunnerAction::Jump, KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.jump.press(now)
            }
            (RunnerAction::Jump, KeyEventKind::Release) => self.jump.release(),
            (RunnerAction::Quit, KeyEventKind::Press) => self.quit = true,
            (RunnerAction::Quit, _) => {}
        }
        Some(action)
    }

    /// Drain pending terminal events without blocking.
    pub fn poll_pending(&mut self) -> std::io::Result<ArrayVec<RunnerAction, MAX_EVENTS_PER_POLL>> {
        let mut actions = ArrayVec::new();
        while !actions.is_full() && event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Some(action) = self.handle_event(&ev, Instant::now()) {
                actions.push(action);
            }
        }
        Ok(actions)
    }

    pub fn jump_held_at(&self, now: Instant) -> bool {
        self.jump.is_held(now)
    }
}

impl InputSource for KeyboardInput {
    fn is_jump_held(&mut self) -> bool {
        if let Err(err) = self.poll_pending() {
            warn!("failed to read terminal input: {err}");
        }
        self.jump_held_at(Instant::now())
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn held_key_times_out() {
        let t0 = Instant::now();
        let mut held = HeldKey::new(Duration::from_millis(150));
        assert!(!held.is_held(t0));

        held.press(t0);
        assert!(held.is_held(t0 + Duration::from_millis(100)));
        assert!(held.is_held(t0 + Duration::from_millis(150)));
        assert!(!held.is_held(t0 + Duration::from_millis(151)));
    }

    #[test]
    fn repeat_extends_hold() {
        let t0 = Instant::now();
        let mut input = KeyboardInput::new();
        input.handle_event(&key(KeyCode::Char(' '), KeyEventKind::Press), t0);
        input.handle_event(
            &key(KeyCode::Char(' '), KeyEventKind::Repeat),
            t0 + Duration::from_millis(120),
        );
        assert!(input.jump_held_at(t0 + Duration::from_millis(250)));
    }

    #[test]
    fn release_event_ends_hold_immediately() {
        let t0 = Instant::now();
        let mut input = KeyboardInput::new();
        input.handle_event(&key(KeyCode::Up, KeyEventKind::Press), t0);
        assert!(input.jump_held_at(t0));
        input.handle_event(&key(KeyCode::Up, KeyEventKind::Release), t0);
        assert!(!input.jump_held_at(t0));
    }

    #[test]
    fn quit_key_sets_flag() {
        let mut input = KeyboardInput::new();
        assert!(!input.quit_requested());
        let action = input.handle_event(&key(KeyCode::Esc, KeyEventKind::Press), Instant::now());
        assert_eq!(action, Some(RunnerAction::Quit));
        assert!(input.quit_requested());
    }

    #[test]
    fn other_events_are_ignored() {
        let mut input = KeyboardInput::new();
        let now = Instant::now();
        assert_eq!(input.handle_event(&Event::Resize(80, 24), now), None);
        assert_eq!(input.handle_event(&key(KeyCode::Left, KeyEventKind::Press), now), None);
        assert!(!input.jump_held_at(now));
        assert!(!input.quit_requested());
    }
}
