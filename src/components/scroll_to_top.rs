use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::reveal::prefers_reduced_motion;

/// Floating back-to-top button. Appears once the reader has scrolled past
/// the hero; the jump is instant when reduced motion is requested.
#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let show = use_state(|| false);

    {
        let show = show.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");
                let scroll_window = window.clone();
                let on_scroll = move || {
                    let y = scroll_window.scroll_y().unwrap_or(0.0);
                    show.set(y > 240.0);
                };
                on_scroll();
                let scroll_callback = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .ok();
                let cleanup_window = window.clone();
                move || {
                    cleanup_window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .ok();
                }
            },
            (),
        );
    }

    let onclick = Callback::from(move |_| {
        if let Some(window) = web_sys::window() {
            if prefers_reduced_motion() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            } else {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    });

    html! {
        <>
            <button
                type="button"
                {onclick}
                aria-label="Scroll to top"
                title="Back to top"
                class={classes!("scroll-top", (*show).then(|| "shown"))}
            >
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M5 15l7-7 7 7" />
                </svg>
            </button>
            <style>
                {r#"
                    .scroll-top {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        height: 3rem;
                        width: 3rem;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(22, 163, 74, 0.9);
                        color: white;
                        cursor: pointer;
                        box-shadow: 0 12px 24px rgba(0, 0, 0, 0.25);
                        opacity: 0;
                        transform: translateY(12px);
                        pointer-events: none;
                        transition: all 0.3s ease;
                    }
                    .scroll-top.shown {
                        opacity: 1;
                        transform: none;
                        pointer-events: auto;
                    }
                    .scroll-top:hover {
                        background: #15803d;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                    }
                    .scroll-top svg {
                        height: 1.5rem;
                        width: 1.5rem;
                    }
                "#}
            </style>
        </>
    }
}
