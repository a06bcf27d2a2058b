//! # Contact Panel
//!
//! Contact form. Client-side validation runs before any request goes out;
//! the submit button locks while a send is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::ContactRequest;

use crate::services::portfolio::submit_contact;

#[component]
pub fn ContactPanel() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let (sending, set_sending) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (success, set_success) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_success.set(None);

        let request = ContactRequest::from_form(
            &name.get(),
            &email.get(),
            &subject.get(),
            &message.get(),
        );
        if let Err(msg) = request.validate() {
            set_error.set(Some(msg));
            return;
        }

        set_sending.set(true);
        spawn_local(async move {
            match submit_contact(&request).await {
                Ok(resp) => {
                    set_success.set(Some(resp.message));
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_subject.set(String::new());
                    set_message.set(String::new());
                }
                Err(msg) => {
                    log::warn!("Contact submission failed: {}", msg);
                    set_error.set(Some(msg));
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="contact">
            <h2 class="section-title">"Get In Touch"</h2>
            <form class="contact-form" on:submit=on_submit>
                <input
                    type="text"
                    class="form-input"
                    placeholder="Your name"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    class="form-input"
                    placeholder="Your email"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    class="form-input"
                    placeholder="Subject"
                    prop:value=subject
                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                />
                <textarea
                    class="form-input form-textarea"
                    placeholder="Your message"
                    prop:value=message
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                {move || success.get().map(|msg| view! { <p class="form-success">{msg}</p> })}

                <button type="submit" class="form-submit" disabled=sending>
                    {move || if sending.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}
