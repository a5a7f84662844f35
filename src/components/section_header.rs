use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    #[prop_or_default]
    pub eyebrow: Option<AttrValue>,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(true)]
    pub centered: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let align = if props.centered {
        "section-header centered"
    } else {
        "section-header"
    };
    html! {
        <header class={align}>
            if let Some(eyebrow) = props.eyebrow.clone() {
                <p class="section-eyebrow">{eyebrow}</p>
            }
            <h2 class="section-title">{props.title.clone()}</h2>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="section-subtitle">{subtitle}</p>
            }
        </header>
    }
}
