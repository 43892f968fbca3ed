//! Input capability polled once per frame.
//!
//! The game only ever asks "is the jump key down right now?". There is no
//! event queue, so a tap released between two polls is not seen.

use std::collections::VecDeque;

/// Source of the per-frame jump signal.
pub trait InputSource {
    /// Whether the jump key is held at the polling instant.
    fn is_jump_held(&mut self) -> bool;

    /// Whether the player asked to leave the game.
    ///
    /// Checked by the frame driver after [`is_jump_held`](Self::is_jump_held);
    /// sources without a quit key keep the default.
    fn quit_requested(&self) -> bool {
        false
    }
}

impl<F> InputSource for F
where
    F: FnMut() -> bool,
{
    fn is_jump_held(&mut self) -> bool {
        self()
    }
}

/// Deterministic input: one scripted value per poll, then `false` forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<bool>,
    polls: usize,
    quit_after: Option<usize>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: script.into_iter().collect(),
            polls: 0,
            quit_after: None,
        }
    }

    /// Never jumps.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Jump held only on the given (0-based) poll indices.
    pub fn jump_on(frames: &[usize]) -> Self {
        let len = frames.iter().max().map_or(0, |&m| m + 1);
        Self::new((0..len).map(|i| frames.contains(&i)))
    }

    /// Report a quit request once `polls` polls have happened.
    pub fn with_quit_after(mut self, polls: usize) -> Self {
        self.quit_after = Some(polls);
        self
    }

    /// Number of times the source has been polled
    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl InputSource for ScriptedInput {
    fn is_jump_held(&mut self) -> bool {
        self.polls += 1;
        self.script.pop_front().unwrap_or(false)
    }

    fn quit_requested(&self) -> bool {
        self.quit_after.is_some_and(|n| self.polls >= n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_plays_then_goes_quiet() {
        let mut input = ScriptedInput::new([true, false, true]);
        let polled: Vec<bool> = (0..5).map(|_| input.is_jump_held()).collect();
        assert_eq!(polled, vec![true, false, true, false, false]);
        assert_eq!(input.polls(), 5);
    }

    #[test]
    fn jump_on_marks_selected_frames() {
        let mut input = ScriptedInput::jump_on(&[1, 3]);
        let polled: Vec<bool> = (0..4).map(|_| input.is_jump_held()).collect();
        assert_eq!(polled, vec![false, true, false, true]);
    }

    #[test]
    fn quit_after_polls() {
        let mut input = ScriptedInput::idle().with_quit_after(2);
        assert!(!input.quit_requested());
        input.is_jump_held();
        assert!(!input.quit_requested());
        input.is_jump_held();
        assert!(input.quit_requested());
    }

    #[test]
    fn closures_are_input_sources() {
        let mut n = 0;
        let mut every_other = || {
            n += 1;
            n % 2 == 0
        };
        assert!(!every_other.is_jump_held());
        assert!(every_other.is_jump_held());
        assert!(!every_other.quit_requested());
    }
}
