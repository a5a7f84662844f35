use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::content;

/// Fixed page header with anchor navigation. Gains a solid backdrop once the
/// page is scrolled and collapses into a bottom-sheet menu on phones.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let y = scroll_window.scroll_y().unwrap_or(0.0);
                    scrolled.set(y > 8.0);
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .ok();
                move || {
                    window
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

    // Escape closes the mobile menu.
    {
        let menu_open = menu_open.clone();
        let deps = *menu_open;
        use_effect_with_deps(
            move |open: &bool| {
                let listener = open.then(|| {
                    let window = web_sys::window().expect("no window");
                    let menu_open = menu_open.clone();
                    let key_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);
                    window
                        .add_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        )
                        .ok();
                    (window, key_callback)
                });
                move || {
                    if let Some((window, key_callback)) = listener {
                        window
                            .remove_event_listener_with_callback(
                                "keydown",
                                key_callback.as_ref().unchecked_ref(),
                            )
                            .ok();
                    }
                }
            },
            deps,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <>
            <header class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
                <nav class="nav-content">
                    <a href="/" class="nav-brand">
                        <img
                            src="/images/logo_wo.PNG"
                            alt=""
                            aria-hidden="true"
                            class={classes!("nav-brand-mark", (*scrolled).then(|| "shown"))}
                        />
                        <span>{content::SITE_NAME}</span>
                    </a>

                    <ul class="nav-links">
                        { for content::NAV.iter().map(|item| html! {
                            <li key={item.href}>
                                <a href={item.href} class="nav-link">{item.label}</a>
                            </li>
                        }) }
                    </ul>

                    <button
                        type="button"
                        class="burger-menu"
                        aria-label="Open menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        <span class={classes!("burger-bar", (*menu_open).then(|| "open-top"))}></span>
                        <span class={classes!("burger-bar", (*menu_open).then(|| "open-mid"))}></span>
                        <span class={classes!("burger-bar", (*menu_open).then(|| "open-bot"))}></span>
                    </button>
                </nav>
            </header>

            <div
                class={classes!("nav-backdrop", (*menu_open).then(|| "open"))}
                onclick={close_menu.clone()}
            />
            <div id="mobile-menu" class={classes!("mobile-sheet", (*menu_open).then(|| "open"))}>
                <nav class="mobile-sheet-links">
                    <a href="/" class="mobile-link" onclick={close_menu.clone()}>{"Home"}</a>
                    { for content::NAV.iter().map(|item| {
                        let close_menu = close_menu.clone();
                        html! {
                            <a key={item.href} href={item.href} class="mobile-link" onclick={close_menu}>
                                {item.label}
                            </a>
                        }
                    }) }
                </nav>
            </div>

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(8px);
                        transition: background-color 0.3s ease;
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-weight: 600;
                        color: #0f172a;
                        text-decoration: none;
                    }
                    .nav-brand-mark {
                        height: 1.25rem;
                        width: 1.25rem;
                        object-fit: contain;
                        opacity: 0;
                        transform: scale(0.9) translateX(-4px);
                        transition: all 0.3s ease-out;
                    }
                    .nav-brand-mark.shown {
                        opacity: 1;
                        transform: none;
                    }
                    .nav-links {
                        display: none;
                        list-style: none;
                        align-items: center;
                        gap: 1.5rem;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-link {
                        position: relative;
                        font-weight: 600;
                        color: #0f172a;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover {
                        color: #16a34a;
                    }
                    .nav-link::after {
                        content: "";
                        position: absolute;
                        left: 0;
                        bottom: -0.25rem;
                        height: 2px;
                        width: 0;
                        background: #16a34a;
                        transition: width 0.3s ease;
                    }
                    .nav-link:hover::after {
                        width: 100%;
                    }
                    .burger-menu {
                        display: inline-flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 5px;
                        height: 2.5rem;
                        width: 2.5rem;
                        border: none;
                        background: transparent;
                        cursor: pointer;
                    }
                    .burger-bar {
                        display: block;
                        height: 2px;
                        width: 1.25rem;
                        background: #334155;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .burger-bar.open-top { transform: translateY(7px) rotate(45deg); }
                    .burger-bar.open-mid { opacity: 0; }
                    .burger-bar.open-bot { transform: translateY(-7px) rotate(-45deg); }
                    .nav-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                        background: rgba(0, 0, 0, 0.4);
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                    }
                    .nav-backdrop.open {
                        opacity: 1;
                        pointer-events: auto;
                    }
                    .mobile-sheet {
                        position: fixed;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        z-index: 50;
                        transform: translateY(100%);
                        transition: transform 0.3s ease;
                        will-change: transform;
                    }
                    .mobile-sheet.open {
                        transform: translateY(0);
                    }
                    .mobile-sheet-links {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(8px);
                        border-radius: 1rem 1rem 0 0;
                        box-shadow: 0 -8px 30px rgba(0, 0, 0, 0.2);
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .mobile-link {
                        font-size: 1.125rem;
                        color: #1e293b;
                        text-decoration: none;
                    }
                    .mobile-link:hover {
                        color: #16a34a;
                    }
                    @media (min-width: 768px) {
                        .nav-links { display: flex; }
                        .burger-menu, .mobile-sheet, .nav-backdrop { display: none; }
                    }
                "#}
            </style>
        </>
    }
}
