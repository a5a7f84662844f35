//! Static site copy and data. Everything the sections render comes from
//! here so wording changes never touch component code.

pub const SITE_NAME: &str = "Topia";
pub const OFFICIAL_NAME: &str = "Topia Holdings";
pub const TAGLINE: &str = "Transforming waste into resources for a circular future.";
pub const SLOGAN: &str = "Sustain Life on Earth";

pub const COMPANY_EMAIL: &str = "admin@the-topia.com";
pub const COMPANY_PHONE: &str = "+1(336) 539-2131";
pub const COMPANY_ADDRESS: &str = "220 Elmira Street, Burlington NC 27217";

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV: &[NavItem] = &[
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Services", href: "#services" },
    NavItem { label: "Process", href: "#process" },
    NavItem { label: "Teams", href: "#teams" },
    NavItem { label: "EOT", href: "#EOT" },
    NavItem { label: "Contact", href: "#contact" },
];

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "recycling",
        title: "Plastic Recycling & Processing",
        description: "Collecting and processing post-industrial and post-consumer plastics \
                      into high-quality recycled feedstock.",
        image: "/images/p/IMG_7382.jpeg",
    },
    Service {
        id: "closed-loop",
        title: "Closed-Loop & Toll Recycling Programs",
        description: "Helping manufacturers close the loop with circular supply chains and \
                      toll processing services.",
        image: "/images/p/IMG_4880.jpeg",
    },
    Service {
        id: "waste-recovery",
        title: "Waste Management & Resource Recovery",
        description: "Partnering on waste-to-energy and industrial waste recovery to reduce \
                      environmental impact.",
        image: "/images/p/IMG_7317.jpeg",
    },
];

pub struct ValueCard {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

pub const VALUES: &[ValueCard] = &[
    ValueCard { id: "local-partnerships", title: "Local Partnerships", icon: "🤝" },
    ValueCard { id: "expertise-innovation", title: "Expertise & Innovation", icon: "⚙️" },
    ValueCard { id: "shared-prosperity", title: "Shared Prosperity & Ownership", icon: "👥" },
    ValueCard { id: "sustainability", title: "Sustainability & Responsibility", icon: "🌱" },
];

/// How a process step lays out its imagery.
#[derive(Clone, Copy, PartialEq)]
pub enum StepLayout {
    OverlayRight,
    ImageLeft,
    ImageRight,
    ImageLeftDuo,
    Centered,
}

pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
    pub layout: StepLayout,
    pub images: &'static [&'static str],
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Intake",
        description: "Receive and register plastics from suppliers; verify material type, \
                      source, and condition.",
        layout: StepLayout::OverlayRight,
        images: &["/images/p/operation/truck2.png", "/images/p/operation/box.png"],
    },
    ProcessStep {
        title: "Storage",
        description: "Stage and store by polymer/resin family with tracked batches for \
                      traceability.",
        layout: StepLayout::ImageLeft,
        images: &["/images/p/operation/L1310812.jpeg"],
    },
    ProcessStep {
        title: "Prepared for Grind",
        description: "Pre-sorting, decontamination, and size reduction prep for consistent \
                      feedstock.",
        layout: StepLayout::ImageRight,
        images: &["/images/p/operation/L1310777.jpeg"],
    },
    ProcessStep {
        title: "Processing",
        description: "Shredding, washing, and extrusion. Closed-loop water systems and \
                      in-line QC.",
        layout: StepLayout::ImageLeftDuo,
        images: &[
            "/images/p/operation/L1310843.jpeg",
            "/images/p/operation/L1310855.jpeg",
        ],
    },
    ProcessStep {
        title: "Final Product",
        description: "High-quality regrinds/pellets, tested in lab and delivered or \
                      reintroduced in closed-loop.",
        layout: StepLayout::Centered,
        images: &["/images/p/operation/L1310769.jpeg"],
    },
];

pub struct MissionCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icons: &'static [&'static str],
}

pub const MISSION_CARDS: &[MissionCard] = &[
    MissionCard {
        id: "expertise-innovation",
        title: "Expertise & Innovation",
        description: "Process engineering, data, and advanced equipment, applied \
                      pragmatically to drive quality, throughput, and conversion.",
        icons: &["⚙️", "💡", "🔬"],
    },
    MissionCard {
        id: "local-partnerships",
        title: "Local Partnerships",
        description: "We build long-term relationships with regional manufacturers and \
                      community partners to create resilient circular networks.",
        icons: &["🤝", "🏭", "📍"],
    },
    MissionCard {
        id: "shared-prosperity",
        title: "Shared Prosperity",
        description: "Stakeholder alignment through transparency and value-sharing, turning \
                      progress into durable, distributed outcomes.",
        icons: &["👥", "💡", "🤝"],
    },
];

#[derive(PartialEq)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub avatar: Option<&'static str>,
}

/// First two entries are the featured founders and always render first; the
/// rest are sorted by last name at render time.
pub const TEAM: &[TeamMember] = &[
    TeamMember {
        id: "alexander",
        name: "Alexander Long",
        role: "Chief Executive Officer, Co-Founder",
        bio: "12+ years in sustainability and circularity. Expert in mechanical recycling, \
              plastics compounding, and business growth strategies, turning vision into \
              measurable value.",
        avatar: Some("/images/teams/al.jpeg"),
    },
    TeamMember {
        id: "liang",
        name: "Liang Zhao",
        role: "Co-Operator, Co-Founder",
        bio: "20+ years in capital and financial planning. Skilled in market expansion and \
              tackling hard-to-recycle materials, strengthening capital structures and \
              long-term resilience.",
        avatar: Some("/images/teams/lz.jpeg"),
    },
    TeamMember {
        id: "travis",
        name: "Travis Langdale",
        role: "Chief Sales & Marketing",
        bio: "20+ years in recycling and industrial services. Expert in market expansion \
              and partnership building, driving high-value collaborations and operational \
              sustainability.",
        avatar: Some("/images/teams/tl.jpeg"),
    },
    TeamMember {
        id: "marijke",
        name: "Marijke Long",
        role: "Chief Networking Officer",
        bio: "30+ years in business development and networking. Builds high-impact \
              relationships, opens new opportunities, and strengthens long-term market \
              connectivity.",
        avatar: Some("/images/teams/ml.jpeg"),
    },
    TeamMember {
        id: "brian",
        name: "Brian Morgan",
        role: "Executive Trustee for Employee Ownership Trust",
        bio: "Background in investment, startups, and financial structuring. Blends \
              strategic insight with innovative thinking to drive sustainable, win-win \
              growth.",
        avatar: Some("/images/teams/br.jpeg"),
    },
    TeamMember {
        id: "stephen",
        name: "Stephen Wright",
        role: "Chief Operations Officer",
        bio: "30+ years in manufacturing and supply chain operations. Focused on \
              scalability, continuous improvement, and cross-functional alignment to \
              ensure efficiency and quality.",
        avatar: Some("/images/teams/sw.png"),
    },
];

/// Last name, lowercased, for roster ordering.
pub fn last_name_key(name: &str) -> String {
    name.split_whitespace()
        .last()
        .unwrap_or(name)
        .to_lowercase()
}

pub struct EotPurpose {
    pub text: &'static str,
    pub icon: &'static str,
}

pub const EOT_PURPOSES: &[EotPurpose] = &[
    EotPurpose {
        text: "Hold and manage shares in the Company for the long-term benefit of current \
               and future employees.",
        icon: "🏘️",
    },
    EotPurpose {
        text: "Promote employee engagement, well-being, and a sense of shared ownership.",
        icon: "💚",
    },
    EotPurpose {
        text: "Ensure that the Company operates in a sustainable, ethical, and inclusive \
               manner, aligning with its core values.",
        icon: "🌿",
    },
    EotPurpose {
        text: "Support long-term company performance and alignment of employee and \
               organizational interests.",
        icon: "📈",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_are_page_anchors() {
        for item in NAV {
            assert!(item.href.starts_with('#'), "{} is not an anchor", item.href);
            assert!(!item.label.is_empty());
        }
    }

    #[test]
    fn roster_has_featured_founders_first() {
        assert!(TEAM.len() >= 2);
        assert!(TEAM[0].role.contains("Co-Founder"));
        assert!(TEAM[1].role.contains("Co-Founder"));
    }

    #[test]
    fn last_name_key_uses_final_word() {
        assert_eq!(last_name_key("Alexander Long"), "long");
        assert_eq!(last_name_key("Cher"), "cher");
    }

    #[test]
    fn process_step_images_match_layout() {
        for step in PROCESS_STEPS {
            let expected = match step.layout {
                StepLayout::OverlayRight | StepLayout::ImageLeftDuo => 2,
                _ => 1,
            };
            assert_eq!(step.images.len(), expected, "step {}", step.title);
        }
    }
}
