//! Theme flag persistence and application.
//!
//! Reads the `"theme"` key from `localStorage` and applies the
//! `.light-theme` class to `<body>`. Toggle writes back to `localStorage`
//! and updates the class. Absence of the key means dark, the site's
//! default; no media-query probing happens. Requires a browser environment.

use crate::state::ui::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Read the persisted theme preference.
///
/// Returns [`Theme::Dark`] outside the browser, when nothing is stored, or
/// when the stored value is unrecognized.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Theme::Dark,
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(val) = storage.get_item(STORAGE_KEY) {
                return Theme::from_flag(val.as_deref());
            }
        }

        Theme::Dark
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Dark
    }
}

/// Apply or remove the `.light-theme` class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let class_list = body.class_list();
            let result = if theme == Theme::Light {
                class_list.add_1("light-theme")
            } else {
                class_list.remove_1("light-theme")
            };
            if result.is_err() {
                leptos::logging::warn!("failed to update theme class");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new flag.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(STORAGE_KEY, next.as_str()).is_err() {
                    leptos::logging::warn!("failed to persist theme preference");
                }
            }
        }
    }
    next
}
