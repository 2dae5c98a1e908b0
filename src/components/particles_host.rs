//! Bridge to the third-party particles library for the hero background.
//!
//! The library is loaded (or not) by the host page; this component only
//! mounts the container and, in the browser, hands the configuration to the
//! `particlesJS` global if one exists. A missing library leaves the hero
//! background static, never raising an error.

use leptos::prelude::*;

/// Particle configuration, passed verbatim to the library.
#[cfg(feature = "hydrate")]
const PARTICLES_CONFIG: &str = r##"{
  "particles": {
    "number": { "value": 60, "density": { "enable": true, "value_area": 800 } },
    "color": { "value": "#3b82f6" },
    "shape": { "type": "circle" },
    "opacity": { "value": 0.5, "random": true, "anim": { "enable": true, "speed": 1, "opacity_min": 0.1 } },
    "size": { "value": 3, "random": true, "anim": { "enable": true, "speed": 5, "size_min": 0.1 } },
    "line_linked": { "enable": true, "distance": 150, "color": "#3b82f6", "opacity": 0.4, "width": 1 },
    "move": { "enable": true, "speed": 4, "direction": "none", "random": true, "straight": false, "out_mode": "out" }
  },
  "interactivity": {
    "detect_on": "canvas",
    "events": { "onhover": { "enable": true, "mode": "repulse" }, "onclick": { "enable": true, "mode": "push" }, "resize": true },
    "modes": { "repulse": { "distance": 100, "duration": 0.4 }, "push": { "particles_nb": 4 } }
  },
  "retina_detect": true
}"##;

/// Container for the animated hero background.
#[component]
pub fn ParticlesHost() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            init_particles();
        });
    }

    view! { <div id="particles-js" class="particles-host" aria-hidden="true"></div> }
}

#[cfg(feature = "hydrate")]
fn init_particles() {
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(global) = js_sys::Reflect::get(&window, &JsValue::from_str("particlesJS")) else {
        return;
    };
    // Library not loaded on this page.
    let Ok(init) = global.dyn_into::<js_sys::Function>() else {
        return;
    };
    let Ok(config) = js_sys::JSON::parse(PARTICLES_CONFIG) else {
        leptos::logging::warn!("particles configuration failed to parse");
        return;
    };
    if init
        .call2(&JsValue::NULL, &JsValue::from_str("particles-js"), &config)
        .is_err()
    {
        leptos::logging::warn!("particles initialization failed");
    }
}
