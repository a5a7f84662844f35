use yew::prelude::*;

use crate::components::contact_modal::ContactModal;
use crate::content;

const MAP_SRC: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3223.5613479252884\
!2d-79.44764922408677!3d36.1041796066245!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2\
!1s0x88532a4bcd4d3295%3A0x862db973cc3dfe58!2s220%20Elmira%20St%2C%20Burlington%2C%20NC%2027217\
!5e0!3m2!1sen!2sus!4v1757900757530!5m2!1sen!2sus";

/// Contact teaser: company details, an embedded map, and the button that
/// opens the contact form modal.
#[function_component(Contact)]
pub fn contact() -> Html {
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="contact-inner">
                <div class="contact-header">
                    <h2>{"Contact Us"}</h2>
                    <div class="title-rule" />
                </div>

                <ul class="contact-details">
                    <li><span aria-hidden="true">{"📞"}</span><span>{content::COMPANY_PHONE}</span></li>
                    <li><span aria-hidden="true">{"✉️"}</span><span>{content::COMPANY_EMAIL}</span></li>
                    <li><span aria-hidden="true">{"📍"}</span><span>{content::COMPANY_ADDRESS}</span></li>
                </ul>

                <button class="contact-open" onclick={open_modal}>{"Contact Us"}</button>

                <div class="contact-map">
                    <iframe title="Google Map" src={MAP_SRC} loading="lazy" allowfullscreen={true} />
                </div>

                <ContactModal open={*modal_open} on_close={close_modal} />
            </div>
            <style>
                {r#"
                    .contact-section {
                        padding: 4rem 0;
                        background: #f9fafb;
                    }
                    .contact-inner {
                        max-width: 42rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        text-align: center;
                    }
                    .contact-header h2 {
                        font-size: 1.875rem;
                        font-weight: 600;
                        color: #0f172a;
                        margin: 0 0 0.5rem;
                    }
                    .contact-section .title-rule {
                        margin: 0 auto;
                        height: 2px;
                        width: 3.5rem;
                        border-radius: 1px;
                        background: #16a34a;
                    }
                    .contact-details {
                        margin: 1.5rem 0 0;
                        padding: 0;
                        list-style: none;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        color: #334155;
                        font-size: 1.125rem;
                    }
                    .contact-details li {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                    }
                    .contact-open {
                        margin-top: 2.5rem;
                        display: inline-block;
                        border: none;
                        border-radius: 0.375rem;
                        background: #047857;
                        color: #f9fafb;
                        font-size: 1rem;
                        font-weight: 500;
                        padding: 0.75rem 1.5rem;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                        cursor: pointer;
                        transition: background-color 0.3s ease;
                    }
                    .contact-open:hover { background: #16a34a; }
                    .contact-map {
                        position: relative;
                        margin: 3rem auto;
                        height: 50vh;
                        width: 100vw;
                        left: 50%;
                        transform: translateX(-50%);
                    }
                    .contact-map iframe {
                        position: absolute;
                        inset: 0;
                        height: 100%;
                        width: 100%;
                        border: 0;
                    }
                    @media (min-width: 768px) {
                        .contact-section { padding: 6rem 0; }
                    }
                "#}
            </style>
        </section>
    }
}
