//! Timed numeric entry (terminal-facing).
//!
//! This crate is a pure state machine: it consumes crossterm key codes and
//! produces a typed outcome, leaving polling, deadlines, and drawing to the
//! caller. That keeps it unit-testable without a terminal.
//!
//! The outcome type deliberately separates "submitted but unusable"
//! ([`PromptOutcome::Invalid`]) from "the deadline passed"
//! ([`PromptOutcome::TimedOut`]); the game loop forfeits on both but tells
//! the player which one happened.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Enough for any value the prompts accept (bounds never exceed two digits;
/// headroom keeps overlong entries visible until submit rejects them).
pub const MAX_DIGITS: usize = 4;

/// Result of one entry attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// A number within the inclusive bounds.
    Value(u32),
    /// Submitted empty, out of range, or too long.
    Invalid,
    /// The deadline passed before Enter. Produced by the caller's poll
    /// loop, never by [`NumberPrompt`] itself.
    TimedOut,
}

/// Keyboard-driven editor for one bounded numeric entry.
///
/// Digits accumulate into a fixed-capacity buffer, Backspace edits, Enter
/// submits. Non-digit characters are ignored, so a malformed entry cannot
/// be composed; range checking happens at submit.
#[derive(Debug, Clone)]
pub struct NumberPrompt {
    min: u32,
    max: u32,
    digits: ArrayVec<u8, MAX_DIGITS>,
}

impl NumberPrompt {
    pub fn new(min: u32, max: u32) -> Self {
        debug_assert!(min <= max);
        Self {
            min,
            max,
            digits: ArrayVec::new(),
        }
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    /// The digits typed so far, for echoing next to the prompt.
    pub fn entry(&self) -> &str {
        // The buffer only ever holds ASCII digits.
        std::str::from_utf8(&self.digits).unwrap_or_default()
    }

    /// Feed one key press. Returns `Some` when Enter submits the entry.
    pub fn handle_key(&mut self, code: KeyCode) -> Option<PromptOutcome> {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if !self.digits.is_full() {
                    self.digits.push(c as u8);
                }
                None
            }
            KeyCode::Backspace => {
                self.digits.pop();
                None
            }
            KeyCode::Enter => Some(self.submit()),
            _ => None,
        }
    }

    fn submit(&self) -> PromptOutcome {
        match self.entry().parse::<u32>() {
            Ok(v) if v >= self.min && v <= self.max => PromptOutcome::Value(v),
            _ => PromptOutcome::Invalid,
        }
    }
}

/// Quit keys: `q`, or Ctrl-C (raw mode swallows the usual SIGINT).
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
