//! Contact form: client-side validation, background submission, and
//! loading/success/error presentation.

use leptos::prelude::*;

use crate::net::api;
use crate::state::contact::{ContactState, Field};

/// The contact form.
///
/// Validation runs entirely client-side before any network activity; every
/// invalid field is marked at once and the submission is aborted. A passing
/// attempt locks the submit button, posts in the background, and the lock
/// is released in every outcome branch. Field values survive failures so
/// the user can correct and resubmit.
#[component]
pub fn ContactForm() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let proceed = state
            .try_update(ContactState::begin_submit)
            .unwrap_or(false);
        if !proceed {
            // Validation failed; errors are already on the fields and no
            // request goes out.
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let fields = state.get_untracked().fields.clone();
            leptos::task::spawn_local(async move {
                let outcome = api::submit_contact(api::CONTACT_ENDPOINT, &fields).await;
                let _ = state.try_update(|s| s.finish_submit(outcome));
            });
        }
    };

    let submitting = move || state.get().submitting;
    let success = move || state.get().success;
    let error = move || state.get().error;

    view! {
        <form id="contact-form" class="contact-form" novalidate on:submit=on_submit>
            <FieldInput state=state field=Field::Name label="Name"/>
            <FieldInput state=state field=Field::Email label="Email"/>
            <FieldInput state=state field=Field::Subject label="Subject"/>
            <FieldInput state=state field=Field::Message label="Message"/>

            <button
                id="submit-btn"
                type="submit"
                class="btn btn--primary"
                class:btn-loading=submitting
                disabled=submitting
            >
                {move || if submitting() { "Sending..." } else { "Send Message" }}
            </button>

            <div
                id="success-message"
                class="form-message form-message--success"
                aria-live="polite"
                style:display=move || if success().is_some() { "block" } else { "none" }
            >
                {move || success().unwrap_or_default()}
            </div>
            <div
                id="error-message"
                class="form-message form-message--error"
                aria-live="polite"
                style:display=move || if error().is_some() { "block" } else { "none" }
            >
                {move || error().unwrap_or_default()}
            </div>
        </form>
    }
}

/// One labeled field with its error slot. The message field renders as a
/// textarea, everything else as a single-line input.
#[component]
fn FieldInput(
    state: RwSignal<ContactState>,
    field: Field,
    label: &'static str,
) -> impl IntoView {
    let value = move || state.get().fields.value(field).to_owned();
    let error = move || state.get().field_error(field);
    let invalid = move || error().is_some();

    let on_input = move |ev| {
        state.update(|s| s.fields.set(field, event_target_value(&ev)));
    };

    let control = if field == Field::Message {
        view! {
            <textarea
                id=field.id()
                name=field.id()
                class="form-control"
                class:is-invalid=invalid
                rows="5"
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        let input_type = if field == Field::Email { "email" } else { "text" };
        view! {
            <input
                id=field.id()
                name=field.id()
                class="form-control"
                class:is-invalid=invalid
                type=input_type
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=field.id()>{label}</label>
            {control}
            <div class="field-error" id=format!("{}-error", field.id())>
                {move || {
                    error().map(|msg| view! { <small class="text-danger">{msg}</small> })
                }}
            </div>
        </div>
    }
}
