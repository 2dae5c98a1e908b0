use serde::{Deserialize, Serialize};

use crate::consts;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Timing configuration for one engine instance.
///
/// All delays are fixed values, never computed. Pages that want a different
/// feel construct their own config instead of the engine guessing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingConfig {
    /// Delay between ticks while typing forward.
    pub type_ms: u32,
    /// Delay between ticks while deleting.
    pub delete_ms: u32,
    /// Pause on the fully typed phrase before deletion begins.
    pub hold_full_ms: u32,
    /// Pause on the empty display before the next phrase begins.
    pub hold_empty_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_ms: consts::TYPE_TICK_MS,
            delete_ms: consts::DELETE_TICK_MS,
            hold_full_ms: consts::HOLD_FULL_MS,
            hold_empty_ms: consts::HOLD_EMPTY_MS,
        }
    }
}

/// Which direction the cursor is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

/// The result of one tick: what to display and how long to wait before the
/// next call to [`TypingEngine::advance`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// The currently visible prefix of the active phrase.
    pub text: String,
    /// Delay until the next tick, in milliseconds.
    pub delay_ms: u32,
}

/// Tick-driven typewriter state machine.
///
/// The engine never schedules itself. The host calls [`advance`] once per
/// tick and sleeps for the returned `delay_ms` before the next call, so one
/// tick schedules exactly the next one and slow rendering can never cause
/// overlapping invocations.
///
/// Invariants: `word_index < phrases.len()` and
/// `char_index <= current phrase char count` hold between every pair of
/// ticks. The cycle wraps from the last phrase back to the first and runs
/// for as long as the host keeps ticking.
///
/// [`advance`]: TypingEngine::advance
#[derive(Clone, Debug)]
pub struct TypingEngine {
    phrases: Vec<String>,
    config: TypingConfig,
    word_index: usize,
    char_index: usize,
    phase: Phase,
}

impl TypingEngine {
    /// Build an engine over a phrase cycle.
    ///
    /// Blank phrases are dropped; returns `None` when nothing remains, so a
    /// misconfigured host renders nothing instead of ticking on an empty
    /// cycle.
    #[must_use]
    pub fn new(phrases: Vec<String>, config: TypingConfig) -> Option<Self> {
        let phrases: Vec<String> = phrases.into_iter().filter(|p| !p.is_empty()).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            config,
            word_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        })
    }

    /// The active timing configuration.
    #[must_use]
    pub fn config(&self) -> TypingConfig {
        self.config
    }

    /// The current cursor phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The phrase the cursor currently sits in.
    #[must_use]
    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.word_index]
    }

    fn visible_prefix(&self) -> String {
        self.current_phrase().chars().take(self.char_index).collect()
    }

    /// Advance the animation by one tick.
    ///
    /// The visible text length always changes by exactly one character
    /// relative to the previous tick: it grows while typing and shrinks
    /// while deleting. Phase boundaries return the longer pause delays.
    pub fn advance(&mut self) -> Frame {
        match self.phase {
            Phase::Typing => {
                self.char_index += 1;
                let full_len = self.current_phrase().chars().count();
                let delay_ms = if self.char_index == full_len {
                    self.phase = Phase::Deleting;
                    self.config.hold_full_ms
                } else {
                    self.config.type_ms
                };
                Frame { text: self.visible_prefix(), delay_ms }
            }
            Phase::Deleting => {
                self.char_index -= 1;
                if self.char_index == 0 {
                    self.word_index = (self.word_index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    Frame {
                        text: String::new(),
                        delay_ms: self.config.hold_empty_ms,
                    }
                } else {
                    Frame {
                        text: self.visible_prefix(),
                        delay_ms: self.config.delete_ms,
                    }
                }
            }
        }
    }
}
