use yew::prelude::*;

use crate::content::{self, Service};
use crate::reveal::{delay_style, stagger_delay, use_reveal, RevealConfig};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    #[prop_or(false)]
    pub dark: bool,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let header = use_node_ref();
    let header_revealed = use_reveal(header.clone(), RevealConfig::with_threshold(0.15));

    let theme = if props.dark { "dark" } else { "light" };

    html! {
        <section id="services" class={classes!("services-section", theme)}>
            <header
                ref={header}
                class={classes!("services-header", "reveal", header_revealed.then(|| "visible"))}
                style={delay_style(header_revealed, 40)}
            >
                <p class="section-eyebrow">{"Core Services"}</p>
                <h2>{"What We Offer"}</h2>
                <p class="services-subtext">
                    {"Advanced recycling, closed-loop programs, and resource recovery that \
                      align business value with environmental responsibility."}
                </p>
            </header>

            <div class="services-grid">
                { for content::SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <ServiceCard
                        key={service.id}
                        service_index={i}
                        delay_ms={stagger_delay(i, 80, 80)}
                    />
                }) }
            </div>
            <style>
                {r#"
                    .services-section {
                        padding: 4rem 1.5rem;
                    }
                    .services-section.light {
                        background: white;
                        color: #0f172a;
                    }
                    .services-section.dark {
                        background: #16a34a;
                        color: #f9fafb;
                    }
                    .services-header {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .services-header h2 {
                        margin-top: 0.75rem;
                        font-size: 2.25rem;
                        font-weight: 600;
                    }
                    .light .section-eyebrow { color: #047857; }
                    .dark .section-eyebrow { color: #fefce8; }
                    .light .services-subtext { color: #475569; }
                    .dark .services-subtext { color: rgba(249, 250, 251, 0.85); }
                    .services-grid {
                        max-width: 80rem;
                        margin: 2.5rem auto 0;
                        display: grid;
                        gap: 2rem;
                        grid-template-columns: 1fr;
                    }
                    .service-card {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        transition-property: opacity, transform;
                    }
                    .service-card:hover {
                        transform: translateY(-4px);
                    }
                    .service-card-photo {
                        width: 100%;
                        border-radius: 1rem;
                        overflow: hidden;
                    }
                    .light .service-card-photo { background: #f3f4f6; }
                    .dark .service-card-photo { background: rgba(22, 101, 52, 0.4); }
                    .service-card-photo img {
                        display: block;
                        width: 100%;
                        height: 14rem;
                        object-fit: cover;
                        transition: transform 0.5s ease-in-out;
                    }
                    .service-card:hover .service-card-photo img {
                        transform: scale(1.04);
                    }
                    .service-card h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        text-align: center;
                        margin: 0;
                    }
                    .service-card p {
                        line-height: 1.7;
                        margin: 0;
                    }
                    .light .service-card p { color: #475569; }
                    .dark .service-card p { color: rgba(249, 250, 251, 0.85); }
                    @media (min-width: 640px) {
                        .services-grid { grid-template-columns: 1fr 1fr; }
                    }
                    @media (min-width: 1024px) {
                        .services-section { padding: 6rem 1.5rem; }
                        .services-grid { grid-template-columns: 1fr 1fr 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service_index: usize,
    delay_ms: u64,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let card = use_node_ref();
    let revealed = use_reveal(card.clone(), RevealConfig::with_threshold(0.14));
    let service: &Service = &content::SERVICES[props.service_index];

    html! {
        <article
            ref={card}
            class={classes!("service-card", "reveal", revealed.then(|| "visible"))}
            style={delay_style(revealed, props.delay_ms)}
        >
            <div class="service-card-photo">
                <img src={service.image} alt={service.title} loading="lazy" />
            </div>
            <div>
                <h3>{service.title}</h3>
                <p>{service.description}</p>
            </div>
        </article>
    }
}
