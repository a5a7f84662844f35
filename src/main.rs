use log::{info, Level};
use yew::prelude::*;

mod content;
mod reveal;

mod components {
    pub mod contact_modal;
    pub mod cookie_banner;
    pub mod footer;
    pub mod logo;
    pub mod masked_img;
    pub mod navbar;
    pub mod scroll_to_top;
    pub mod section_header;
    pub mod wave;
}

mod sections {
    pub mod about;
    pub mod contact;
    pub mod eot;
    pub mod hero;
    pub mod mission;
    pub mod process;
    pub mod services;
    pub mod teams;
}

use components::cookie_banner::CookieBanner;
use components::footer::Footer;
use components::navbar::Navbar;
use components::scroll_to_top::ScrollToTop;
use sections::{
    about::About, contact::Contact, eot::Eot, hero::Hero, mission::Mission, process::Process,
    services::Services, teams::Teams,
};

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <Navbar />
            <main>
                <Hero />
                <About />
                <Services dark={false} />
                <Mission />
                <Process />
                <Teams />
                <Eot />
                <Contact />
            </main>
            <Footer />
            <ScrollToTop />
            <CookieBanner />
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
                            Helvetica, Arial, sans-serif;
                        color: #0f172a;
                        background: #f9fafb;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    .section-eyebrow {
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        margin: 0;
                    }
                    .section-header .section-title {
                        font-size: 2.25rem;
                        font-weight: 600;
                        margin: 0.75rem 0 0;
                    }
                    .section-header .section-subtitle {
                        margin-top: 0.75rem;
                        color: #475569;
                    }
                    .section-header.centered {
                        text-align: center;
                        margin-left: auto;
                        margin-right: auto;
                    }
                    /* Scroll-reveal transition. Elements carry .reveal from first
                       render and gain .visible once their controller fires. */
                    .reveal {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    @media (prefers-reduced-motion: reduce) {
                        html { scroll-behavior: auto; }
                        .reveal {
                            transition: none;
                            opacity: 1;
                            transform: none;
                        }
                    }
                "#}
            </style>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
