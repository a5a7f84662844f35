use yew::prelude::*;

use crate::components::wave::{Wave, WavePosition};
use crate::content;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <Wave position={WavePosition::Top} dark={true} />
            <div class="footer-inner">
                <div class="footer-brand">
                    <img src="/images/logo_wo.PNG" alt="Topia Logo" class="footer-logo" />
                    <span>{content::SITE_NAME}</span>
                </div>

                <div class="footer-right">
                    <p class="footer-slogan">{format!("{}.", content::SLOGAN)}</p>

                    <ul class="footer-contact">
                        <li><span aria-hidden="true">{"📞"}</span><span>{content::COMPANY_PHONE}</span></li>
                        <li><span aria-hidden="true">{"✉️"}</span><span>{content::COMPANY_EMAIL}</span></li>
                        <li><span aria-hidden="true">{"📍"}</span><span>{content::COMPANY_ADDRESS}</span></li>
                    </ul>

                    <p class="footer-copyright">
                        {format!("© 2025 {} All rights reserved.", content::OFFICIAL_NAME)}
                    </p>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        background: #16a34a;
                        color: #f9fafb;
                    }
                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        min-height: 33vh;
                        padding: 3rem 1.5rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        gap: 3rem;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.125rem;
                        font-weight: 500;
                        align-self: flex-start;
                        margin-top: auto;
                    }
                    .footer-logo {
                        height: 1.5rem;
                        width: 1.5rem;
                        object-fit: contain;
                    }
                    .footer-right {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-end;
                        gap: 1.5rem;
                    }
                    .footer-slogan {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 1.5rem;
                        text-align: right;
                        margin: 0;
                    }
                    .footer-contact {
                        list-style: none;
                        margin: 0;
                        padding: 0 0 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        font-size: 0.75rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.3);
                    }
                    .footer-contact li {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .footer-copyright {
                        font-size: 0.875rem;
                        margin: 0;
                    }
                    @media (min-width: 768px) {
                        .footer-inner {
                            flex-direction: row;
                            justify-content: space-between;
                            padding: 4rem 1.5rem;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
