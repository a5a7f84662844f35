use yew::prelude::*;

use crate::content;
use crate::reveal::{delay_style, stagger_delay, use_reveal, RevealConfig};

#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    // Tall section, fire before most of it has scrolled past.
    let revealed = use_reveal(section.clone(), RevealConfig::with_threshold(0.18));
    let reveal_class = |extra: &'static str| {
        classes!("reveal", extra, revealed.then(|| "visible"))
    };

    html! {
        <section id="about" ref={section} class="about-section">
            <div class="about-grid">
                <div class={reveal_class("about-photo")} style={delay_style(revealed, 40)}>
                    <img
                        src="/images/p/about/L1310833_large.jpeg"
                        alt="Topia facility and recycling operations"
                        loading="lazy"
                    />
                </div>

                <div class={reveal_class("about-copy")} style={delay_style(revealed, 120)}>
                    <div class="about-header">
                        <h2>{"About Us"}</h2>
                        <div class="title-rule-left" />
                    </div>

                    <p class="about-lede">
                        <span class="about-lede-strong">
                            {"We build resilient circular networks through regional \
                              partnerships and smart recycling operations."}
                        </span>
                        <span class="about-mission">
                            {"Our mission is simple: turn difficult plastics into reliable, \
                              high-value feedstock, at scale and close to where value is \
                              created."}
                        </span>
                    </p>

                    <ul class="about-values">
                        { for content::VALUES.iter().enumerate().map(|(i, value)| html! {
                            <li
                                key={value.id}
                                class={reveal_class("about-value")}
                                style={delay_style(revealed, stagger_delay(i, 160, 90))}
                            >
                                <span class="about-value-icon" aria-hidden="true">{value.icon}</span>
                                <h4>{value.title}</h4>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
            <style>
                {r#"
                    .about-section {
                        padding: 4rem 1.5rem;
                        background: #f9fafb;
                    }
                    .about-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        gap: 2.5rem;
                        align-items: stretch;
                        padding: 2rem 0;
                    }
                    .about-photo img {
                        display: block;
                        height: 100%;
                        width: 100%;
                        object-fit: cover;
                        border-radius: 1rem;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: transform 0.5s ease-in-out;
                    }
                    .about-photo img:hover {
                        transform: scale(1.05);
                    }
                    .about-copy {
                        display: flex;
                        flex-direction: column;
                    }
                    .about-header h2 {
                        font-size: 1.875rem;
                        font-weight: 600;
                        color: #0f172a;
                        margin: 0;
                    }
                    .title-rule-left {
                        margin-top: 0.5rem;
                        height: 2px;
                        width: 3.5rem;
                        border-radius: 1px;
                        background: #16a34a;
                    }
                    .about-lede {
                        color: #475569;
                        line-height: 1.7;
                    }
                    .about-lede-strong {
                        display: block;
                        color: #047857;
                        font-weight: 600;
                    }
                    .about-mission {
                        display: block;
                        font-weight: 600;
                        margin-top: 0.5rem;
                    }
                    .about-values {
                        margin-top: 1.5rem;
                        padding: 0;
                        list-style: none;
                        display: grid;
                        gap: 1.25rem;
                        grid-template-columns: 1fr;
                    }
                    .about-value {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        gap: 0.5rem;
                    }
                    .about-value-icon {
                        font-size: 2rem;
                    }
                    .about-value h4 {
                        font-weight: 600;
                        color: #22c55e;
                        margin: 0;
                    }
                    @media (min-width: 768px) {
                        .about-section { padding: 6rem 1.5rem; }
                        .about-grid { grid-template-columns: 1fr 1fr; gap: 3.5rem; }
                        .about-values { grid-template-columns: 1fr 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
