use yew::prelude::*;

use crate::content::{self, TeamMember};
use crate::reveal::{delay_style, stagger_delay, use_reveal, RevealConfig};

#[function_component(Teams)]
pub fn teams() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), RevealConfig::with_threshold(0.2));

    let featured = &content::TEAM[..2];
    let mut rest: Vec<&TeamMember> = content::TEAM[2..].iter().collect();
    rest.sort_by_key(|m| content::last_name_key(m.name));

    html! {
        <section id="teams" ref={section} class="teams-section">
            <div class="teams-inner">
                <header
                    class={classes!("teams-header", "reveal", revealed.then(|| "visible"))}
                    style={delay_style(revealed, 80)}
                >
                    <p class="section-eyebrow">{"Our Team"}</p>
                    <h2>{"People building the circular future"}</h2>
                    <p class="teams-subtext">
                        {"A multidisciplinary team combining operations, technology, and \
                          partnerships to turn waste into lasting value."}
                    </p>
                </header>

                <ul class="teams-featured" aria-label="Featured team members">
                    { for featured.iter().enumerate().map(|(i, member)| html! {
                        <li
                            key={member.id}
                            class={classes!("team-card", "featured", "reveal", revealed.then(|| "visible"))}
                            style={delay_style(revealed, stagger_delay(i, 200, 120))}
                        >
                            <MemberCard {member} large={true} />
                        </li>
                    }) }
                </ul>

                <ul class="teams-rest" aria-label="Team members">
                    { for rest.iter().enumerate().map(|(i, member)| html! {
                        <li
                            key={member.id}
                            class={classes!("team-card", "reveal", revealed.then(|| "visible"))}
                            style={delay_style(revealed, stagger_delay(i, 0, 100))}
                        >
                            <MemberCard member={*member} large={false} />
                        </li>
                    }) }
                </ul>
            </div>
            <style>
                {r#"
                    .teams-section {
                        position: relative;
                        isolation: isolate;
                        width: 100%;
                        background: #f9fafb;
                        color: #16a34a;
                    }
                    .teams-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .teams-header {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .teams-section .section-eyebrow { color: #ca8a04; }
                    .teams-header h2 {
                        margin-top: 0.75rem;
                        font-size: 2.25rem;
                        font-weight: 600;
                    }
                    .teams-subtext { color: rgba(22, 163, 74, 0.8); }
                    .teams-featured, .teams-rest {
                        margin: 2.5rem 0 0;
                        padding: 0;
                        list-style: none;
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: 1fr;
                    }
                    .team-card {
                        border: 1px solid rgba(22, 163, 74, 0.3);
                        border-radius: 1rem;
                        background: white;
                        padding: 1.5rem;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition-property: opacity, transform, box-shadow;
                        height: 100%;
                        box-sizing: border-box;
                    }
                    .team-card:hover {
                        box-shadow: 0 8px 20px rgba(0, 0, 0, 0.08);
                    }
                    .team-card.featured {
                        padding: 2rem;
                    }
                    .member-head {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                    }
                    .member-head h3 {
                        margin: 0;
                        font-size: 1.125rem;
                        font-weight: 600;
                    }
                    .featured .member-head h3 {
                        font-size: 1.5rem;
                    }
                    .member-role {
                        margin: 0.125rem 0 0;
                        font-size: 0.875rem;
                        font-style: italic;
                        color: rgba(22, 163, 74, 0.8);
                    }
                    .featured .member-role { font-style: normal; }
                    .member-bio {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        line-height: 1.7;
                        color: rgba(22, 101, 52, 0.9);
                    }
                    .avatar, .avatar-fallback {
                        height: 3.5rem;
                        width: 3.5rem;
                        border-radius: 9999px;
                        flex-shrink: 0;
                    }
                    .avatar {
                        object-fit: cover;
                        box-shadow: 0 0 0 1px rgba(0, 0, 0, 0.05);
                        transition: transform 0.3s ease;
                    }
                    .team-card:hover .avatar {
                        transform: scale(1.03);
                    }
                    .avatar-fallback {
                        background: #22c55e;
                        color: white;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 600;
                    }
                    @media (min-width: 768px) {
                        .teams-inner { padding: 6rem 1.5rem; }
                        .teams-featured { grid-template-columns: 1fr 1fr; gap: 2rem; }
                        .teams-rest { grid-template-columns: 1fr 1fr; gap: 2rem; }
                    }
                    @media (min-width: 1024px) {
                        .teams-rest { grid-template-columns: repeat(4, 1fr); }
                        .teams-rest .member-head {
                            flex-direction: column;
                            align-items: center;
                            text-align: center;
                        }
                        .teams-rest .member-bio { text-align: center; }
                    }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct MemberCardProps {
    member: &'static TeamMember,
    large: bool,
}

#[function_component(MemberCard)]
fn member_card(props: &MemberCardProps) -> Html {
    let member = props.member;

    let avatar = match member.avatar {
        Some(src) => html! {
            <img class="avatar" src={src} alt={format!("{} avatar", member.name)} loading="lazy" />
        },
        None => {
            let initial = member
                .name
                .trim()
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "T".to_string());
            html! {
                <div class="avatar-fallback" aria-hidden="true" title={member.name}>{initial}</div>
            }
        }
    };

    html! {
        <>
            <div class="member-head">
                { avatar }
                <div>
                    <h3>{member.name}</h3>
                    <p class="member-role">{member.role}</p>
                </div>
            </div>
            <p class="member-bio">{member.bio}</p>
        </>
    }
}
