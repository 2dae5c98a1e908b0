//! Back-to-top control, shown after scrolling past the configured depth.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::scroll;

/// Floating back-to-top button. Visibility is driven by the shared
/// [`UiState`] scroll flags; clicking smooth-scrolls the window to the top.
#[component]
pub fn BackToTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            id="backToTop"
            class="back-to-top"
            class:show=move || ui.get().back_to_top_visible
            aria-label="Back to top"
            on:click=move |_| scroll::scroll_to_top()
        >
            <i class="fas fa-arrow-up" aria-hidden="true"></i>
        </button>
    }
}
