//! About page with reveal-animated biography cards.

use leptos::html;
use leptos::prelude::*;

use crate::util::reveal;

/// About page: a short biography and a timeline, each animating in as it
/// scrolls into view.
#[component]
pub fn AboutPage() -> impl IntoView {
    let bio_ref = NodeRef::<html::Div>::new();
    let bio_visible = RwSignal::new(false);
    reveal::mount_reveal(bio_ref, bio_visible);

    let timeline_ref = NodeRef::<html::Div>::new();
    let timeline_visible = RwSignal::new(false);
    reveal::mount_reveal(timeline_ref, timeline_visible);

    view! {
        <section class="py-5 about">
            <h1>"About Me"</h1>

            <div node_ref=bio_ref class="about__bio" class:animate=move || bio_visible.get()>
                <p>
                    "I'm a full-stack developer who enjoys the whole span of "
                    "the craft: modeling the domain, building the service "
                    "behind it, and polishing the interface in front of it."
                </p>
                <p>
                    "Outside of client work I tinker with generative art, "
                    "contribute to open source, and write about what I learn."
                </p>
            </div>

            <div
                node_ref=timeline_ref
                class="about__timeline"
                class:animate=move || timeline_visible.get()
            >
                {[
                    ("2024 — present", "Independent full-stack consultant"),
                    ("2021 — 2024", "Senior developer, product studio"),
                    ("2018 — 2021", "Web developer, agency work"),
                ]
                    .iter()
                    .enumerate()
                    .map(|(i, (period, role))| {
                        view! {
                            <div class="timeline-item" style=format!("--delay: {i}")>
                                <span class="timeline-item__period">{*period}</span>
                                <span class="timeline-item__role">{*role}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
