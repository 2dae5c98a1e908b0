//! Application state shared across pages and components.
//!
//! Each module holds a plain, testable state struct; components wrap them in
//! `RwSignal`s provided via context. No ambient globals: every mutable flag
//! (theme, scroll styling, form status) has exactly one owning signal.

pub mod contact;
pub mod projects;
pub mod ui;
