use yew::prelude::*;

use crate::content::{self, ProcessStep, StepLayout};
use crate::reveal::{delay_style, use_reveal, RevealConfig};

#[function_component(Process)]
pub fn process() -> Html {
    let header = use_node_ref();
    // The header sits atop a very tall section; a low threshold keeps it
    // from revealing only after the reader is halfway through.
    let header_revealed = use_reveal(header.clone(), RevealConfig::with_threshold(0.08));

    html! {
        <section id="process" class="process-section">
            <div class="process-inner">
                <header
                    ref={header}
                    class={classes!("process-header", "reveal", header_revealed.then(|| "visible"))}
                    style={delay_style(header_revealed, 40)}
                >
                    <p class="section-eyebrow">{"Process"}</p>
                    <h2>{"From Intake to Final Product"}</h2>
                    <p class="process-subtext">
                        {"Scroll to follow each step of our plastics recycling workflow."}
                    </p>
                </header>

                { for content::PROCESS_STEPS.iter().enumerate().map(|(i, _)| html! {
                    <StepBlock key={i} step_index={i} />
                }) }
            </div>
            <style>
                {r#"
                    .process-section {
                        position: relative;
                        isolation: isolate;
                        width: 100%;
                        background: #16a34a;
                        color: #f9fafb;
                    }
                    .process-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .process-header {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .process-header h2 {
                        margin-top: 0.75rem;
                        font-size: 2.25rem;
                        font-weight: 600;
                    }
                    .process-section .section-eyebrow { color: #fefce8; }
                    .process-subtext { color: rgba(249, 250, 251, 0.85); }
                    .process-step {
                        margin-top: 4rem;
                        display: grid;
                        gap: 2rem;
                        align-items: center;
                    }
                    .process-step-copy h3 {
                        font-size: 1.5rem;
                        font-weight: 600;
                        margin: 0;
                    }
                    .process-step-copy p {
                        margin-top: 0.75rem;
                        line-height: 1.7;
                        color: rgba(249, 250, 251, 0.85);
                    }
                    .step-number {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        height: 2.5rem;
                        width: 2.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.15);
                        font-weight: 600;
                        margin-bottom: 0.75rem;
                    }
                    .process-step img {
                        display: block;
                        width: 100%;
                        max-height: 45vh;
                        object-fit: cover;
                        border-radius: 1rem;
                    }
                    .step-overlay {
                        position: relative;
                    }
                    .step-overlay .overlay-img {
                        position: absolute;
                        right: -1rem;
                        bottom: -1.5rem;
                        width: 40%;
                        max-height: none;
                        border-radius: 0.75rem;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                        animation: bounce-slow 1.6s ease-in-out infinite;
                    }
                    @keyframes bounce-slow {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-6px); }
                    }
                    .step-duo {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .step-centered {
                        text-align: center;
                    }
                    .step-centered .step-number { margin-left: auto; margin-right: auto; }
                    @media (min-width: 768px) {
                        .process-inner { padding: 6rem 1.5rem; }
                        .process-step { grid-template-columns: 1fr 1fr; gap: 3rem; }
                        .process-step.step-centered { grid-template-columns: 1fr; }
                        .process-step.image-right .process-step-copy { order: -1; }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .step-overlay .overlay-img { animation: none; }
                    }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StepBlockProps {
    step_index: usize,
}

#[function_component(StepBlock)]
fn step_block(props: &StepBlockProps) -> Html {
    let block = use_node_ref();
    let revealed = use_reveal(block.clone(), RevealConfig::with_threshold(0.12));
    let step: &ProcessStep = &content::PROCESS_STEPS[props.step_index];
    let number = props.step_index + 1;

    let layout_class = match step.layout {
        StepLayout::OverlayRight => "image-left",
        StepLayout::ImageLeft | StepLayout::ImageLeftDuo => "image-left",
        StepLayout::ImageRight => "image-right",
        StepLayout::Centered => "step-centered",
    };

    let imagery = match step.layout {
        StepLayout::OverlayRight => html! {
            <div class="step-overlay">
                <img src={step.images[0]} alt={step.title} loading="lazy" />
                <img class="overlay-img" src={step.images[1]} alt="" aria-hidden="true" loading="lazy" />
            </div>
        },
        StepLayout::ImageLeftDuo => html! {
            <div class="step-duo">
                <img src={step.images[0]} alt={step.title} loading="lazy" />
                <img src={step.images[1]} alt="" loading="lazy" />
            </div>
        },
        _ => html! {
            <img src={step.images[0]} alt={step.title} loading="lazy" />
        },
    };

    html! {
        <div
            ref={block}
            class={classes!("process-step", layout_class, "reveal", revealed.then(|| "visible"))}
        >
            { imagery }
            <div class="process-step-copy">
                <span class="step-number" aria-hidden="true">{number}</span>
                <h3>{step.title}</h3>
                <p>{step.description}</p>
            </div>
        </div>
    }
}
