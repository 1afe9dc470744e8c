//! Contact section: intro copy plus the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a `ContactFormState` signal for its lifetime. Submission runs in a
//! `spawn_local` task between `begin_submit` and `complete`; the resulting
//! notice goes to the shared toast stack.

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactFormState, SubmissionStatus};
use crate::state::toast::ToastState;

const CONTACT_EMAIL: &str = "aayushtailor16@gmail.com";
const CONTACT_LOCATION: &str = "Jaipur, India";

/// Self-contained contact section. Takes no props.
#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = RwSignal::new(ContactFormState::default());
    let toasts = expect_context::<RwSignal<ToastState>>();

    let field_value = move |field: ContactField| move || contact.with(|c| c.form.get(field).to_owned());
    let on_field_input =
        move |field: ContactField| move |ev: leptos::ev::Event| contact.update(|c| c.update_field(field, event_target_value(&ev)));
    let pending = move || contact.with(ContactFormState::is_pending);
    let succeeded = move || contact.with(|c| c.status == SubmissionStatus::Succeeded);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = contact.try_update(ContactFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::components::toast_stack::show_toast;
            use crate::config::{api_base_url, contact_endpoint};
            use crate::net::api::{HttpTransport, submit_contact};

            let endpoint = contact_endpoint(api_base_url());
            let outcome = submit_contact(&HttpTransport, &endpoint, &request).await;
            if let Some(notice) = contact.try_update(|c| c.complete(outcome)).flatten() {
                show_toast(toasts, notice);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, toasts);
        }
    };

    let on_reset = move |_| {
        contact.update(|c| {
            c.reset();
        });
    };

    view! {
        <section id="contact" class="contact-section">
            <div class="contact-section__grid">
                <div class="contact-section__intro">
                    <span class="section-eyebrow">"GET IN TOUCH"</span>
                    <h2 class="section-title">"Let's build something amazing together"</h2>
                    <p class="contact-section__lede">
                        "I'm always open to collaborating on exciting projects or freelance work. "
                        "Feel free to reach out if you'd like to discuss something creative!"
                    </p>
                    <div class="contact-section__details">
                        <div class="contact-detail">
                            <h3>"Email"</h3>
                            <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                        </div>
                        <div class="contact-detail">
                            <h3>"Location"</h3>
                            <p>{CONTACT_LOCATION}</p>
                        </div>
                    </div>
                </div>

                <div class="contact-card">
                    <Show
                        when=succeeded
                        fallback=move || {
                            view! {
                                <form class="contact-form" on:submit=on_submit>
                                    <label class="contact-form__label">
                                        "Name"
                                        <input
                                            class="contact-form__input"
                                            type="text"
                                            name=ContactField::Name.as_str()
                                            placeholder="Your name"
                                            required=true
                                            prop:value=field_value(ContactField::Name)
                                            on:input=on_field_input(ContactField::Name)
                                        />
                                    </label>
                                    <label class="contact-form__label">
                                        "Email"
                                        <input
                                            class="contact-form__input"
                                            type="email"
                                            name=ContactField::Email.as_str()
                                            placeholder="your@email.com"
                                            required=true
                                            prop:value=field_value(ContactField::Email)
                                            on:input=on_field_input(ContactField::Email)
                                        />
                                    </label>
                                    <label class="contact-form__label">
                                        "Message"
                                        <textarea
                                            class="contact-form__input contact-form__input--message"
                                            name=ContactField::Message.as_str()
                                            placeholder="Tell me about your project..."
                                            rows="5"
                                            required=true
                                            prop:value=field_value(ContactField::Message)
                                            on:input=on_field_input(ContactField::Message)
                                        ></textarea>
                                    </label>
                                    <button class="btn btn--primary contact-form__submit" type="submit" disabled=pending>
                                        {move || if pending() { "Sending..." } else { "Send message" }}
                                    </button>
                                </form>
                            }
                        }
                    >
                        <div class="contact-card__success">
                            <div class="contact-card__check">"✓"</div>
                            <h3>"Message Sent!"</h3>
                            <p>"Thanks for reaching out. I'll get back to you soon."</p>
                            <button class="btn btn--primary" on:click=on_reset>
                                "Send another message"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}
