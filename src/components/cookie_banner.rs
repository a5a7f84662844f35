use log::info;
use yew::prelude::*;

const CONSENT_KEY: &str = "cookie-consent";

fn stored_consent() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(CONSENT_KEY)
        .ok()
        .flatten()
}

fn store_consent(choice: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(CONSENT_KEY, choice);
    }
}

/// Consent banner shown until the visitor accepts or declines. The choice is
/// remembered in localStorage so the banner only ever shows once.
#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let visible = use_state(|| false);
    let show_info = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                if stored_consent().is_none() {
                    visible.set(true);
                }
                || ()
            },
            (),
        );
    }

    let handle_consent = {
        let visible = visible.clone();
        Callback::from(move |choice: &'static str| {
            store_consent(choice);
            info!("cookie consent: {choice}");
            visible.set(false);
        })
    };

    let toggle_info = {
        let show_info = show_info.clone();
        Callback::from(move |_| show_info.set(!*show_info))
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class="cookie-banner">
            <div class="cookie-text">
                <p>
                    {"This site uses cookies to analyze traffic and improve your experience. "}
                    <button class="cookie-more" onclick={toggle_info}>
                        { if *show_info { "Hide details" } else { "Learn more" } }
                    </button>
                    {"."}
                </p>
                if *show_info {
                    <div class="cookie-details">
                        {"We use cookies to help us understand how visitors use our website. \
                          This includes anonymous analytics data which tracks page views, \
                          device types, and traffic sources. You can choose to accept or \
                          decline cookies at any time."}
                    </div>
                }
            </div>
            <div class="cookie-actions">
                <button
                    class="cookie-accept"
                    onclick={handle_consent.reform(|_| "accepted")}
                >
                    {"Accept"}
                </button>
                <button
                    class="cookie-decline"
                    onclick={handle_consent.reform(|_| "declined")}
                >
                    {"Decline"}
                </button>
            </div>
            <style>
                {r#"
                    .cookie-banner {
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        background: #111827;
                        color: white;
                        padding: 1rem 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        box-sizing: border-box;
                    }
                    .cookie-text p {
                        font-size: 0.875rem;
                        margin: 0;
                    }
                    .cookie-more {
                        border: none;
                        background: none;
                        padding: 0;
                        color: #34d399;
                        text-decoration: underline;
                        cursor: pointer;
                        font-size: inherit;
                    }
                    .cookie-details {
                        margin-top: 0.5rem;
                        max-width: 28rem;
                        font-size: 0.75rem;
                        line-height: 1.6;
                        color: #d1d5db;
                    }
                    .cookie-actions {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .cookie-accept, .cookie-decline {
                        border: none;
                        border-radius: 0.25rem;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: white;
                        cursor: pointer;
                    }
                    .cookie-accept { background: #059669; }
                    .cookie-accept:hover { background: #16a34a; }
                    .cookie-decline { background: #4b5563; }
                    .cookie-decline:hover { background: #6b7280; }
                    @media (min-width: 768px) {
                        .cookie-banner {
                            flex-direction: row;
                            align-items: center;
                            justify-content: space-between;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
