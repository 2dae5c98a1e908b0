//! Browser-facing helpers: theme persistence, scroll effects, and
//! visibility-driven entrance animations. Everything that touches `web_sys`
//! is gated behind the `hydrate` feature; the pure pieces (thresholds,
//! throttling) live beside them so they stay testable on the host target.

pub mod reveal;
pub mod scroll;
pub mod theme;
