use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(AttrValue::from("#f9fafb"))]
    pub color: AttrValue,
}

/// Logo mark with wordmark and slogan. The flip animation only runs on
/// desktop widths; on phones it fought with the hero layout.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let is_desktop = use_state(|| false);

    {
        let is_desktop = is_desktop.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");
                let check = {
                    let window = window.clone();
                    let is_desktop = is_desktop.clone();
                    move || {
                        let width = window
                            .inner_width()
                            .ok()
                            .and_then(|w| w.as_f64())
                            .unwrap_or(0.0);
                        is_desktop.set(width >= 768.0);
                    }
                };
                check();
                let resize_callback =
                    Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                let window_for_cleanup = window.clone();
                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .ok();
                move || {
                    window_for_cleanup
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .ok();
                }
            },
            (),
        );
    }

    let color = props.color.clone();
    html! {
        <div class={classes!("logo", (*is_desktop).then(|| "logo-flip"))}>
            <img src="/images/logo_hand.png" alt="Topia logo" class="logo-mark" />
            <h1 class="logo-wordmark" style={format!("color: {color}")}>{"TOPIA"}</h1>
            <p class="logo-slogan" style={format!("color: {color}")}>{crate::content::SLOGAN}</p>
            <style>
                {r#"
                    .logo {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .logo-mark {
                        height: 9rem;
                        width: auto;
                    }
                    .logo-wordmark {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 3rem;
                        letter-spacing: 0.08em;
                        margin: 0;
                    }
                    .logo-slogan {
                        font-size: 0.75rem;
                        letter-spacing: -0.02em;
                        margin: 0;
                    }
                    @keyframes logo-flip {
                        from { transform: rotateY(90deg); opacity: 0; }
                        to { transform: rotateY(0deg); opacity: 1; }
                    }
                    .logo-flip .logo-mark {
                        animation: logo-flip 0.9s ease-out;
                    }
                "#}
            </style>
        </div>
    }
}
