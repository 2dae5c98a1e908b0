//! Bridge component between the Leptos UI and the tick-driven
//! `typewriter::TypingEngine`.
//!
//! The engine decides what to show and how long to wait; this component is
//! only the scheduler. Each iteration sleeps for the delay the previous tick
//! returned, then advances. One tick arms exactly the next one, so slow
//! frames stretch the animation instead of stacking callbacks.

use leptos::prelude::*;
use typewriter::engine::TypingConfig;

/// Typewriter text node cycling through `phrases` forever.
///
/// Renders an empty span and starts nothing when every phrase is blank.
/// Updates both the text content and an `aria-label` every tick so
/// assistive technology announces the partial word. The loop stops only
/// when the page tears the display signal down.
#[component]
pub fn TypingText(
    phrases: Vec<String>,
    #[prop(optional)] config: Option<TypingConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let display = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        use typewriter::engine::TypingEngine;

        if let Some(mut engine) = TypingEngine::new(phrases, config) {
            leptos::task::spawn_local(async move {
                let mut delay_ms = engine.config().type_ms;
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                        delay_ms,
                    )))
                    .await;

                    let frame = engine.advance();
                    delay_ms = frame.delay_ms;
                    // `try_set` hands the value back once the signal is
                    // disposed; that's the shutdown notice.
                    if display.try_set(frame.text).is_some() {
                        break;
                    }
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (phrases, config);
    }

    view! {
        <span
            class="words-typing"
            aria-label=move || format!("Current role: {}", display.get())
        >
            {move || display.get()}
        </span>
    }
}
