use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::wave::{Wave, WavePosition};
use crate::content;

const ROTATE_MS: u32 = 5000;

/// Three-card mission carousel. Advances on a timer, pauses while hovered,
/// and keeps manual prev/next controls.
#[function_component(Mission)]
pub fn mission() -> Html {
    let active = use_state(|| 1usize);
    let paused = use_state(|| false);
    let card_count = content::MISSION_CARDS.len();

    {
        let active = active.clone();
        let deps = (*active, *paused);
        use_effect_with_deps(
            move |deps: &(usize, bool)| {
                let (current, paused) = *deps;
                let timeout = (!paused).then(|| {
                    Timeout::new(ROTATE_MS, move || {
                        active.set((current + 1) % card_count);
                    })
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    let prev = {
        let active = active.clone();
        Callback::from(move |_| active.set((*active + card_count - 1) % card_count))
    };
    let next = {
        let active = active.clone();
        Callback::from(move |_| active.set((*active + 1) % card_count))
    };
    let pause = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let resume = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    html! {
        <section id="core-mission" class="mission-section">
            <Wave position={WavePosition::Top} dark={true} />
            <div class="mission-inner" onmouseenter={pause} onmouseleave={resume}>
                <header class="mission-header">
                    <p class="section-eyebrow">{"Core Mission"}</p>
                    <h2>{"What drives our circular impact"}</h2>
                </header>

                <div class="mission-cards">
                    { for content::MISSION_CARDS.iter().enumerate().map(|(i, card)| html! {
                        <article
                            key={card.id}
                            class={classes!("mission-card", (i == *active).then(|| "active"))}
                        >
                            <div class="mission-icons" aria-hidden="true">
                                { for card.icons.iter().map(|icon| html! { <span>{*icon}</span> }) }
                            </div>
                            <h3>{card.title}</h3>
                            <p>{card.description}</p>
                        </article>
                    }) }
                </div>

                <div class="mission-controls">
                    <button type="button" onclick={prev} aria-label="Previous value">{"‹"}</button>
                    <div class="mission-dots" aria-hidden="true">
                        { for (0..card_count).map(|i| html! {
                            <span class={classes!("dot", (i == *active).then(|| "active"))} />
                        }) }
                    </div>
                    <button type="button" onclick={next} aria-label="Next value">{"›"}</button>
                </div>
            </div>
            <style>
                {r#"
                    .mission-section {
                        position: relative;
                        isolation: isolate;
                        width: 100%;
                        background: #16a34a;
                    }
                    .mission-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .mission-header {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .mission-section .section-eyebrow { color: #fefce8; }
                    .mission-header h2 {
                        margin-top: 0.75rem;
                        font-size: 2.25rem;
                        font-weight: 600;
                        color: white;
                    }
                    .mission-cards {
                        margin-top: 2.5rem;
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: 1fr;
                    }
                    .mission-card {
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.1);
                        color: #f9fafb;
                        padding: 2rem;
                        text-align: center;
                        transition: transform 0.4s ease, background-color 0.4s ease;
                    }
                    .mission-card.active {
                        transform: scale(1.04);
                        background: rgba(255, 255, 255, 0.18);
                    }
                    .mission-icons {
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                        font-size: 1.5rem;
                    }
                    .mission-card h3 {
                        margin: 1rem 0 0;
                        font-size: 1.25rem;
                        font-weight: 600;
                    }
                    .mission-card p {
                        margin-top: 0.75rem;
                        line-height: 1.7;
                        color: rgba(249, 250, 251, 0.85);
                    }
                    .mission-controls {
                        margin-top: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .mission-controls button {
                        height: 2.5rem;
                        width: 2.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.15);
                        color: white;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .mission-controls button:hover {
                        background: rgba(255, 255, 255, 0.3);
                    }
                    .mission-dots {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .dot {
                        height: 0.5rem;
                        width: 0.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.35);
                        transition: background-color 0.3s ease;
                    }
                    .dot.active {
                        background: #fefce8;
                    }
                    @media (min-width: 768px) {
                        .mission-inner { padding: 6rem 1.5rem; }
                        .mission-cards { grid-template-columns: 1fr 1fr 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
