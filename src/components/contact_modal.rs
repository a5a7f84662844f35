use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Debug, Serialize)]
struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

/// Serialize fields as application/x-www-form-urlencoded.
fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or(AttrValue::from("Contact Us"))]
    pub title: AttrValue,
}

/// Modal contact form. Submissions go to the static-site form backend as a
/// URL-encoded POST; fire-and-forget, no retry.
#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let honeypot = use_state(String::new);
    let sending = use_state(|| false);
    let error = use_state(|| None::<String>);
    let first_field = use_node_ref();

    // Escape closes while open.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = open.then(|| {
                    let window = web_sys::window().expect("no window");
                    let key_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            on_close.emit(());
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);
                    window
                        .add_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        )
                        .ok();
                    (window, key_callback)
                });
                move || {
                    if let Some((window, key_callback)) = listener {
                        window
                            .remove_event_listener_with_callback(
                                "keydown",
                                key_callback.as_ref().unchecked_ref(),
                            )
                            .ok();
                    }
                }
            },
            props.open,
        );
    }

    // Focus the first field after the modal paints.
    {
        let first_field = first_field.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open {
                    let timeout = Timeout::new(0, move || {
                        if let Some(input) = first_field.cast::<HtmlInputElement>() {
                            let _ = input.focus();
                        }
                    });
                    timeout.forget();
                }
                || ()
            },
            props.open,
        );
    }

    let oninput_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let oninput_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };
    let oninput_honeypot = {
        let honeypot = honeypot.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            honeypot.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let honeypot = honeypot.clone();
        let sending = sending.clone();
        let error = error.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            // Bots fill the hidden field; silently drop those.
            if !honeypot.is_empty() {
                return;
            }
            if name.is_empty() || email.is_empty() || message.is_empty() {
                error.set(Some("Please fill out all fields.".to_string()));
                return;
            }

            let submission = ContactSubmission {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            let body = encode_form(&[
                ("form-name", "contact"),
                ("name", &submission.name),
                ("email", &submission.email),
                ("message", &submission.message),
                ("bot-field", &honeypot),
            ]);
            debug!(
                "submitting contact form: {}",
                serde_json::to_string(&submission).unwrap_or_default()
            );

            sending.set(true);
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let sending = sending.clone();
            let error = error.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let result = Request::post("/")
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(body)
                    .send()
                    .await;
                sending.set(false);
                match result {
                    Ok(_) => {
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                        on_close.emit(());
                    }
                    Err(e) => {
                        warn!("contact form submission failed: {e}");
                        error.set(Some("Submission failed. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="contact-modal" role="dialog" aria-modal="true" aria-labelledby="contact-title">
            <div class="contact-modal-backdrop" onclick={close.clone()} />
            <div class="contact-modal-panel">
                <div class="contact-modal-body">
                    <div class="contact-modal-header">
                        <h3 id="contact-title">{props.title.clone()}</h3>
                        <div class="title-rule" />
                    </div>

                    <form {onsubmit} name="contact" method="POST" class="contact-form">
                        <input type="hidden" name="form-name" value="contact" />
                        <input
                            type="text"
                            name="bot-field"
                            class="contact-honeypot"
                            tabindex="-1"
                            autocomplete="off"
                            value={(*honeypot).clone()}
                            oninput={oninput_honeypot}
                        />

                        <div class="contact-field">
                            <label for="contact-name">{"Full Name"}</label>
                            <input
                                id="contact-name"
                                ref={first_field.clone()}
                                name="name"
                                type="text"
                                placeholder="What's your full name?"
                                value={(*name).clone()}
                                oninput={oninput_name}
                                required={true}
                            />
                        </div>

                        <div class="contact-field">
                            <label for="contact-email">{"Email Address"}</label>
                            <input
                                id="contact-email"
                                name="email"
                                type="email"
                                placeholder="Where can we reach you?"
                                value={(*email).clone()}
                                oninput={oninput_email}
                                required={true}
                            />
                        </div>

                        <div class="contact-field">
                            <label for="contact-message">{"Your Message"}</label>
                            <textarea
                                id="contact-message"
                                name="message"
                                rows="5"
                                placeholder="Tell us how we can help you…"
                                value={(*message).clone()}
                                oninput={oninput_message}
                                required={true}
                            />
                        </div>

                        if let Some(message) = (*error).clone() {
                            <p class="contact-error">{message}</p>
                        }

                        <div class="contact-submit-row">
                            <button type="submit" disabled={*sending} class="contact-submit">
                                { if *sending { "Sending…" } else { "Submit" } }
                            </button>
                        </div>
                    </form>

                    <button class="contact-close" onclick={close} aria-label="Close modal">
                        {"✕"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                    .contact-modal {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .contact-modal-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(4px);
                    }
                    .contact-modal-panel {
                        position: relative;
                        margin: 0 1rem;
                        width: 100%;
                        max-width: 42rem;
                        border-radius: 1rem;
                        background: white;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .contact-modal-body {
                        padding: 2.5rem;
                    }
                    .contact-modal-header {
                        margin-bottom: 1.5rem;
                        text-align: center;
                    }
                    .contact-modal-header h3 {
                        font-size: 1.875rem;
                        font-weight: 600;
                        margin: 0;
                    }
                    .title-rule {
                        margin: 0.5rem auto 0;
                        height: 2px;
                        width: 3.5rem;
                        border-radius: 1px;
                        background: #059669;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-honeypot {
                        display: none;
                    }
                    .contact-field label {
                        display: block;
                        text-align: left;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #334155;
                    }
                    .contact-field input {
                        margin-top: 0.25rem;
                        width: 100%;
                        border: none;
                        border-bottom: 1px solid rgba(203, 213, 225, 0.7);
                        background: transparent;
                        padding: 0.5rem 0;
                        outline: none;
                        box-sizing: border-box;
                    }
                    .contact-field input:focus,
                    .contact-field input:hover {
                        border-bottom-color: #16a34a;
                    }
                    .contact-field textarea {
                        margin-top: 0.25rem;
                        width: 100%;
                        border: 1px solid rgba(203, 213, 225, 0.7);
                        border-radius: 0.5rem;
                        padding: 0.5rem 0.75rem;
                        outline: none;
                        box-sizing: border-box;
                        font: inherit;
                    }
                    .contact-field textarea:focus,
                    .contact-field textarea:hover {
                        border-color: #16a34a;
                    }
                    .contact-error {
                        font-size: 0.875rem;
                        color: #dc2626;
                        margin: 0;
                    }
                    .contact-submit-row {
                        display: flex;
                        justify-content: center;
                        padding-top: 0.5rem;
                    }
                    .contact-submit {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: #16a34a;
                        color: #f9fafb;
                        padding: 0.625rem 1.5rem;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: background-color 0.3s ease;
                    }
                    .contact-submit:hover { background: #15803d; }
                    .contact-submit:disabled { opacity: 0.6; cursor: default; }
                    .contact-close {
                        position: absolute;
                        right: 0.75rem;
                        top: 0.75rem;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        height: 2.25rem;
                        width: 2.25rem;
                        border: none;
                        border-radius: 9999px;
                        background: transparent;
                        color: #475569;
                        cursor: pointer;
                    }
                    .contact-close:hover { background: #f1f5f9; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::encode_form;

    #[test]
    fn encodes_reserved_characters() {
        let body = encode_form(&[
            ("form-name", "contact"),
            ("name", "Ada Lovelace"),
            ("message", "pricing & volume?"),
        ]);
        assert_eq!(
            body,
            "form-name=contact&name=Ada%20Lovelace&message=pricing%20%26%20volume%3F"
        );
    }

    #[test]
    fn empty_values_keep_their_keys() {
        assert_eq!(encode_form(&[("bot-field", "")]), "bot-field=");
    }
}
