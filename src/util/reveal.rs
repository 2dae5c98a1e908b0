//! Visibility-driven entrance animations and lazy image loading.
//!
//! Both helpers watch an element with an `IntersectionObserver` and act
//! exactly once on first intersection, then drop the observer. When the
//! observer API is unavailable the effects degrade to "act immediately", so
//! older browsers still see all the content.

use leptos::html;
use leptos::prelude::*;

/// Fraction of the element that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observe an element once and run `on_visible` at first intersection.
///
/// Returns `false` when the observer could not be constructed (API
/// unsupported), leaving the caller to apply its fallback.
#[cfg(feature = "hydrate")]
fn observe_once(element: &web_sys::Element, mut on_visible: Box<dyn FnMut()>) -> bool {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let callback = Closure::<dyn FnMut(Vec<web_sys::IntersectionObserverEntry>, web_sys::IntersectionObserver)>::new(
        move |entries: Vec<web_sys::IntersectionObserverEntry>,
              observer: web_sys::IntersectionObserver| {
            if entries
                .iter()
                .any(web_sys::IntersectionObserverEntry::is_intersecting)
            {
                on_visible();
                observer.disconnect();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));

    let Ok(observer) =
        web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return false;
    };
    observer.observe(element);
    // The observer disconnects itself after the first hit; the closure is
    // leaked with it.
    callback.forget();
    true
}

/// Flip `visible` to `true` when the referenced element first scrolls into
/// view. On the server, and when observation isn't supported, the element is
/// visible from the start.
pub fn mount_reveal(node: NodeRef<html::Div>, visible: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        let armed = RwSignal::new(false);
        Effect::new(move || {
            if armed.get() {
                return;
            }
            let Some(element) = node.get() else {
                return;
            };
            armed.set(true);

            let started = observe_once(
                &element,
                Box::new(move || {
                    let _ = visible.try_set(true);
                }),
            );
            if !started {
                visible.set(true);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = node;
        visible.set(true);
    }
}

/// Promote a `data-src` attribute to `src` when the image first scrolls
/// into view.
pub fn mount_lazy_image(node: NodeRef<html::Img>) {
    #[cfg(feature = "hydrate")]
    {
        let armed = RwSignal::new(false);
        Effect::new(move || {
            if armed.get() {
                return;
            }
            let Some(image) = node.get() else {
                return;
            };
            armed.set(true);

            let target = image.clone();
            let load = move || {
                if let Some(src) = target.get_attribute("data-src") {
                    target.set_src(&src);
                }
            };

            let started = observe_once(&image, Box::new(load.clone()));
            if !started {
                load();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = node;
    }
}
