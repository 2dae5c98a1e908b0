//! Landing page: particle hero, typing animation, and intro section.

use leptos::html;
use leptos::prelude::*;

use crate::components::particles_host::ParticlesHost;
use crate::components::typing_text::TypingText;
use crate::util::{reveal, scroll};

/// Role phrases cycled by the hero typing animation.
fn role_phrases() -> Vec<String> {
    [
        "Software Development",
        "AI Development",
        "Fullstack Development",
        "Web Development",
    ]
    .iter()
    .map(|p| (*p).to_owned())
    .collect()
}

/// Home page with the animated hero and a short introduction.
#[component]
pub fn HomePage() -> impl IntoView {
    let intro_ref = NodeRef::<html::Div>::new();
    let intro_visible = RwSignal::new(false);
    reveal::mount_reveal(intro_ref, intro_visible);

    view! {
        <section class="hero">
            <ParticlesHost/>
            <div class="hero__content">
                <div class="profile-image-container">
                    <img
                        class="profile-image"
                        src="profile_images/profile.jpg"
                        alt="Portrait photo"
                        loading="eager"
                    />
                </div>
                <h1 class="hero__title">"Hi, I build software."</h1>
                <p class="typing-text">
                    "Focused on " <TypingText phrases=role_phrases()/>
                </p>
                <button
                    class="btn btn--primary hero__cta"
                    on:click=move |_| scroll::smooth_scroll_to("intro")
                >
                    "Learn more"
                </button>
            </div>
        </section>

        <section id="intro" class="intro">
            <div node_ref=intro_ref class="intro__card" class:animate=move || intro_visible.get()>
                <h2>"Welcome"</h2>
                <p>
                    "I design and ship web applications end to end — from the "
                    "data layer to the last scroll animation. Have a look at "
                    "my projects, or get in touch through the contact page."
                </p>
            </div>
        </section>
    }
}
