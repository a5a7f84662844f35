use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum WavePosition {
    Top,
    Bottom,
}

#[derive(Properties, PartialEq)]
pub struct WaveProps {
    #[prop_or(WavePosition::Bottom)]
    pub position: WavePosition,
    /// Dark waves are the brand green, light waves match the page background.
    #[prop_or(true)]
    pub dark: bool,
}

const WAVE_PATH: &str = "M0,64L48,80C96,96,192,128,288,117.3C384,107,480,53,576,37.3C672,21,\
768,43,864,53.3C960,64,1056,64,1152,53.3C1248,43,1344,21,1392,10.7L1440,0L1440,0L1392,0C1344,\
0,1248,0,1152,0C1056,0,960,0,864,0C768,0,672,0,576,0C480,0,384,0,288,0C192,0,96,0,48,0L0,0Z";

/// Decorative divider between sections of different background colors.
#[function_component(Wave)]
pub fn wave(props: &WaveProps) -> Html {
    let position = match props.position {
        WavePosition::Top => "wave-top",
        WavePosition::Bottom => "wave-bottom",
    };
    let fill = if props.dark { "#16a34a" } else { "#f9fafb" };
    html! {
        <div class={classes!("wave-divider", position)} aria-hidden="true">
            <svg viewBox="0 0 1440 120" xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="none">
                <path d={WAVE_PATH} fill={fill} />
            </svg>
            <style>
                {r#"
                    .wave-divider {
                        position: absolute;
                        left: 0;
                        right: 0;
                        width: 100%;
                        overflow: hidden;
                        line-height: 0;
                        pointer-events: none;
                    }
                    .wave-divider svg {
                        display: block;
                        width: 100%;
                        height: 120px;
                    }
                    .wave-top {
                        top: 0;
                        transform: translateY(-100%) rotate(180deg);
                    }
                    .wave-bottom {
                        bottom: 0;
                        transform: translateY(100%);
                    }
                "#}
            </style>
        </div>
    }
}
