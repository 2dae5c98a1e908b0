//! Window scroll effects: navbar styling, back-to-top visibility, and
//! smooth scrolling helpers.
//!
//! The scroll listener feeds [`UiState::apply_scroll`] through a throttle so
//! the signal is written at most every [`SCROLL_THROTTLE_MS`] even while the
//! browser fires scroll events per frame. Threshold logic lives in
//! `state::ui` where it is unit-tested; this module only wires the browser.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::prelude::RwSignal;

use crate::state::ui::{ScrollFx, UiState};

#[cfg(feature = "hydrate")]
use leptos::prelude::{GetUntracked, Set};

/// Minimum interval between scroll-state updates, in milliseconds.
pub const SCROLL_THROTTLE_MS: f64 = 100.0;

/// Simple rate limiter for high-frequency event callbacks.
///
/// The first call always passes; later calls pass once `wait_ms` has
/// elapsed since the last passing call. The caller supplies the clock so
/// the behavior is testable without real time.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    wait_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(wait_ms: f64) -> Self {
        Self { wait_ms, last_ms: None }
    }

    /// Whether a callback arriving at `now_ms` should run.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        let pass = self.last_ms.is_none_or(|last| now_ms - last >= self.wait_ms);
        if pass {
            self.last_ms = Some(now_ms);
        }
        pass
    }
}

/// Attach the window scroll listener driving navbar and back-to-top styling.
///
/// The listener runs for the page lifetime; redundant signal writes are
/// skipped so unchanged scroll positions don't re-render the chrome.
pub fn attach_scroll_effects(ui: RwSignal<UiState>, fx: ScrollFx) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };

        let mut throttle = Throttle::new(SCROLL_THROTTLE_MS);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if !throttle.ready(js_sys::Date::now()) {
                return;
            }
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            let mut state = ui.get_untracked();
            if state.apply_scroll(y, &fx) {
                ui.set(state);
            }
        });

        if window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("failed to attach scroll listener");
        }
        // Page-lifetime listener; intentionally leaked.
        callback.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ui, fx);
    }
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Smooth-scroll an in-page anchor target into view.
///
/// The target also receives `tabindex="-1"` and focus so assistive
/// technology lands where the viewport did. Missing targets are a no-op.
pub fn smooth_scroll_to(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);

        if target.set_attribute("tabindex", "-1").is_err() {
            leptos::logging::warn!("failed to mark anchor target focusable");
        }
        if let Some(element) = target.dyn_ref::<web_sys::HtmlElement>() {
            // Focusing must not jump the viewport while the smooth scroll
            // is still running.
            let focus = web_sys::FocusOptions::new();
            focus.set_prevent_scroll(true);
            if element.focus_with_options(&focus).is_err() {
                leptos::logging::warn!("failed to focus anchor target");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
