//! Page-load overlay with accessibility bookkeeping.

use leptos::prelude::*;

#[cfg(test)]
#[path = "page_loader_test.rs"]
mod page_loader_test;

/// Fallback delay before the page is revealed when the `load` event cannot
/// be observed.
pub const PAGE_LOADER_FALLBACK_MS: u32 = 800;

/// Whether the document has already finished loading, meaning the `load`
/// event will never fire again.
#[must_use]
pub fn document_settled(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Loading overlay shown until the window finishes loading.
///
/// The `page-loaded` class lands on `<body>` when the window `load` event
/// fires, or immediately when hydration runs after the document already
/// settled. The stylesheet fades the overlay out on that class, and the
/// overlay is marked `aria-hidden` so assistive technology skips the
/// spinner afterwards. When the event cannot be observed the reveal falls
/// back to a [`PAGE_LOADER_FALLBACK_MS`] timer.
#[component]
pub fn PageLoader() -> impl IntoView {
    let hidden = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let reveal = move || {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                if body.class_list().add_1("page-loaded").is_err() {
                    leptos::logging::warn!("failed to mark page as loaded");
                }
            }
            let _ = hidden.try_set(true);
        };

        let mut armed = false;
        if let Some(window) = web_sys::window() {
            if window
                .document()
                .is_some_and(|d| document_settled(&d.ready_state()))
            {
                reveal();
                armed = true;
            } else {
                let callback = Closure::<dyn FnMut()>::new(reveal);
                armed = window
                    .add_event_listener_with_callback("load", callback.as_ref().unchecked_ref())
                    .is_ok();
                // Fires at most once per page; leaked with the page.
                callback.forget();
            }
        }

        if !armed {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    PAGE_LOADER_FALLBACK_MS,
                )))
                .await;
                reveal();
            });
        }
    }

    view! {
        <div class="page-loader" aria-hidden=move || hidden.get().to_string()>
            <div class="loader-spinner"></div>
        </div>
    }
}
