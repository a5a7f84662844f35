use yew::prelude::*;

use crate::components::logo::Logo;
use crate::reveal::{use_reveal, RevealConfig};

/// Full-viewport opener. Above the fold, so the reveal is eager rather than
/// waiting on an intersection event that may fire after first paint.
#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), RevealConfig::eager());

    html! {
        <section
            ref={section}
            class={classes!("hero", "reveal", revealed.then(|| "visible"))}
            aria-label="Hero"
        >
            <div class="hero-photo">
                <img src="/images/p/hero.jpeg" alt="" />
                <div class="hero-photo-shade" />
            </div>
            <div class="hero-content">
                <div class="hero-inner">
                    <Logo />
                    <h1 class="hero-headline">
                        {"Post-Industrial"}<br />{"Plastic Management"}<br />{"Redefined"}
                    </h1>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        isolation: isolate;
                        height: 100svh;
                        width: 100%;
                        overflow: hidden;
                        background: #16a34a;
                    }
                    .hero-photo {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        right: 0;
                        display: flex;
                        align-items: center;
                        justify-content: flex-end;
                        pointer-events: none;
                    }
                    .hero-photo img {
                        display: block;
                        height: 100%;
                        max-height: 100svh;
                        width: auto;
                        object-fit: cover;
                    }
                    .hero-photo-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, #0F1B04 20%, transparent 60%);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        height: 100%;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                    }
                    .hero-inner {
                        max-width: 45rem;
                        text-align: left;
                    }
                    .hero-headline {
                        margin-top: 1rem;
                        color: white;
                        font-size: clamp(1.75rem, 5.4vw, 3.75rem);
                        line-height: 1.2;
                        text-shadow: 0 2px 8px rgba(0, 0, 0, 0.4);
                    }
                "#}
            </style>
        </section>
    }
}
