#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// The persisted display theme.
///
/// The site is dark by default; a stored `"light"` flag flips it. Any other
/// or missing value falls back to dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The string form written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored flag, defaulting to dark when absent or unrecognized.
    #[must_use]
    pub fn from_flag(flag: Option<&str>) -> Theme {
        match flag {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Scroll-effect trigger points, in CSS pixels.
///
/// The navbar trigger varies per page in the shipped site (50 px on some
/// pages, 100 px on others), so the values stay configurable per
/// instantiation instead of being unified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFx {
    /// Scroll depth past which the navbar gets its `scrolled` styling.
    pub navbar_px: f64,
    /// Scroll depth past which the back-to-top control becomes visible.
    pub back_to_top_px: f64,
}

impl Default for ScrollFx {
    fn default() -> Self {
        Self {
            navbar_px: 100.0,
            back_to_top_px: 300.0,
        }
    }
}

/// Shared page chrome state: theme plus scroll-driven styling flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl UiState {
    /// Update the scroll-driven flags for a new scroll depth.
    ///
    /// Triggers are strict (`y > threshold`). Returns whether anything
    /// changed, so callers can skip redundant signal writes from the
    /// high-frequency scroll listener.
    pub fn apply_scroll(&mut self, y: f64, fx: &ScrollFx) -> bool {
        let scrolled = y > fx.navbar_px;
        let show_top = y > fx.back_to_top_px;
        let changed = scrolled != self.navbar_scrolled || show_top != self.back_to_top_visible;
        self.navbar_scrolled = scrolled;
        self.back_to_top_visible = show_top;
        changed
    }
}
