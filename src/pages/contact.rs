//! Contact page: reveal-animated contact details plus the form.

use leptos::html;
use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::util::reveal;

const CONTACT_CHANNELS: [(&str, &str); 3] = [
    ("Email", "hello@example.com"),
    ("Location", "Remote, UTC+1"),
    ("Availability", "Open for freelance work"),
];

/// Contact page. The info items animate in together on first view with a
/// per-item stagger; the form handles its own validation and submission.
#[component]
pub fn ContactPage() -> impl IntoView {
    let content_ref = NodeRef::<html::Div>::new();
    let visible = RwSignal::new(false);
    reveal::mount_reveal(content_ref, visible);

    view! {
        <section class="py-5 contact">
            <h1>"Get In Touch"</h1>

            <div node_ref=content_ref class="contact-content">
                <div class="contact-info">
                    {CONTACT_CHANNELS
                        .iter()
                        .enumerate()
                        .map(|(i, (label, value))| {
                            view! {
                                <div
                                    class="contact-info-item"
                                    class:animate=move || visible.get()
                                    style=format!("--delay: {i}")
                                >
                                    <span class="contact-info-item__label">{*label}</span>
                                    <span class="contact-info-item__value">{*value}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div
                    class="contact-form-card"
                    class:animate=move || visible.get()
                    style=format!("--delay: {}", CONTACT_CHANNELS.len())
                >
                    <ContactForm/>
                </div>
            </div>
        </section>
    }
}
