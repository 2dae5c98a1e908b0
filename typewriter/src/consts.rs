//! Default timing constants for the typing animation.

// ── Per-character delays ────────────────────────────────────────

/// Delay between ticks while typing forward, in milliseconds.
pub const TYPE_TICK_MS: u32 = 120;

/// Delay between ticks while deleting. Deletion reads faster than typing.
pub const DELETE_TICK_MS: u32 = 80;

// ── Phase-boundary pauses ───────────────────────────────────────

/// Pause after a phrase is fully typed, before deletion starts.
/// Simulates reading time, so it is the longest delay in the cycle.
pub const HOLD_FULL_MS: u32 = 1500;

/// Pause after a phrase is fully deleted, before the next one starts.
pub const HOLD_EMPTY_MS: u32 = 800;
