//! Typewriter animation engine for the portfolio hero section.
//!
//! This crate owns the typing-effect state machine and nothing else: it has
//! no timers, no DOM access, and no notion of wall-clock time. The host UI
//! layer calls [`engine::TypingEngine::advance`] once per tick and is told
//! what text to display and how long to wait before the next tick. That
//! split keeps the animation deterministic and unit-testable on the host
//! target, while the browser bridge stays a thin scheduling loop.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The tick-driven [`engine::TypingEngine`] state machine |
//! | [`consts`] | Default per-tick and pause delays |

pub mod consts;
pub mod engine;
