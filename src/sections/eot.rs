use yew::prelude::*;

use crate::components::masked_img::MaskedImg;
use crate::components::section_header::SectionHeader;
use crate::content;
use crate::reveal::{delay_style, stagger_delay, use_reveal, RevealConfig};

#[function_component(Eot)]
pub fn eot() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), RevealConfig::with_threshold(0.2));

    html! {
        <section id="EOT" ref={section} class="eot-section">
            <div class="eot-inner">
                <div
                    class={classes!("eot-header", "reveal", revealed.then(|| "visible"))}
                    style={delay_style(revealed, 80)}
                >
                    <SectionHeader
                        eyebrow="EOT"
                        title="Employee Ownership Trust"
                        subtitle="Topia is operating as an Employee Ownership Trust (EOT)"
                    />
                </div>

                <div
                    class={classes!("eot-grid", "reveal", revealed.then(|| "visible"))}
                    style={delay_style(revealed, 160)}
                >
                    <div class="eot-copy">
                        <h3>{"What is an EOT?"}</h3>
                        <div class="title-rule-left" />
                        <p>
                            {"An Employee Ownership Trust holds a controlling stake in the \
                              company on behalf of its employees. Instead of value flowing \
                              to outside shareholders, the people doing the work share in \
                              the long-term success they create."}
                        </p>
                        <div class="eot-photo">
                            <MaskedImg
                                src="/images/p/about/L1310833_large.jpeg"
                                texture="/images/logo_hand.png"
                                mask_scale={0.9}
                                aspect_ratio={16.0 / 9.0}
                                mask_id="eot-mask"
                            />
                        </div>
                    </div>

                    <ul class="eot-purposes">
                        { for content::EOT_PURPOSES.iter().enumerate().map(|(i, purpose)| html! {
                            <li
                                key={i}
                                class={classes!("eot-card", "reveal", revealed.then(|| "visible"))}
                                style={delay_style(revealed, stagger_delay(i, 240, 90))}
                            >
                                <span class="eot-icon" aria-hidden="true">{purpose.icon}</span>
                                <p>{purpose.text}</p>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
            <style>
                {r#"
                    .eot-section {
                        position: relative;
                        isolation: isolate;
                        width: 100%;
                        background: #f9fafb;
                        color: #16a34a;
                    }
                    .eot-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .eot-header {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .eot-section .section-eyebrow { color: #15803d; }
                    .eot-header h2 {
                        margin-top: 0.75rem;
                        font-size: 2.25rem;
                        font-weight: 600;
                    }
                    .eot-header .section-subtitle { color: rgba(22, 163, 74, 0.8); }
                    .eot-photo { margin-top: 2rem; }
                    .eot-grid {
                        margin-top: 3rem;
                        display: grid;
                        gap: 2rem;
                        align-items: center;
                        grid-template-columns: 1fr;
                    }
                    .eot-copy h3 {
                        font-size: 1.5rem;
                        font-weight: 600;
                        margin: 0 0 0.5rem;
                    }
                    .eot-copy p {
                        margin-top: 1.5rem;
                        line-height: 1.7;
                        color: rgba(22, 101, 52, 0.9);
                    }
                    .eot-purposes {
                        margin: 0;
                        padding: 0;
                        list-style: none;
                        display: grid;
                        gap: 1rem;
                    }
                    .eot-card {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        border: 1px solid rgba(21, 128, 61, 0.2);
                        border-radius: 1rem;
                        background: white;
                        padding: 1rem 1.25rem;
                        transition-property: opacity, transform;
                    }
                    .eot-icon { font-size: 1.5rem; }
                    .eot-card p {
                        margin: 0;
                        font-size: 0.9375rem;
                        line-height: 1.6;
                        color: rgba(22, 101, 52, 0.9);
                    }
                    @media (min-width: 768px) {
                        .eot-inner { padding: 6rem 1.5rem; }
                        .eot-grid { grid-template-columns: 1fr 1fr; gap: 3rem; }
                    }
                "#}
            </style>
        </section>
    }
}
