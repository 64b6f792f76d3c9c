//! Landing page copy.

pub const HERO_TITLE_LEAD: &str = "Alkebulant";
pub const HERO_TITLE_ACCENT: &str = "Labs";
pub const HERO_SUBTITLE: &str = "Where innovation meets execution. We prototype, experiment, and build the future of technology through cutting-edge research and open-source contributions.";

pub const MISSION_TITLE: &str = "Labs: Fueling Innovation";
pub const MISSION_BODY: &str = "Alkebulant Labs is the frontier R&D division of Alkebulant, prototyping tomorrow's breakthroughs in AI‑blockchain hybrids, decentralized health/agri/biotech infrastructure, and next‑gen robotics protocols. We build high‑risk experiments that power the parent company's production solutions.";

pub const BANNER_IMAGE: &str = "https://res.cloudinary.com/dbczn8b8l/image/upload/v1768767554/yeksl6naddhfhtsnwvio.jpg";
pub const BANNER_CAPTION: &str = "Building For Humanity";

pub const CTA_TITLE: &str = "Ready to Collaborate?";
pub const CTA_BODY: &str = "We're always looking for partners, contributors, and curious minds to join us in building the future.";

/// Side-by-side comparison of the parent company and the lab.
pub struct Comparison {
    pub name: &'static str,
    pub points: &'static [&'static str],
    pub highlighted: bool,
}

pub static COMPARISONS: [Comparison; 2] = [
    Comparison {
        name: "Alkebulant.com",
        points: &["Production solutions", "Revenue-focused", "Proven tech stacks"],
        highlighted: false,
    },
    Comparison {
        name: "Alkebulant Labs",
        points: &["Frontier prototypes", "Open experiments", "Bleeding-edge tech"],
        highlighted: true,
    },
];

/// Entry-point card linking to a section of the site.
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub link_text: &'static str,
}

pub static HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: "🚀",
        title: "Live Prototypes",
        description: "Explore our cutting-edge experiments and proof-of-concept builds.",
        link: "/solutions",
        link_text: "View Solutions",
    },
    Highlight {
        icon: "⌨",
        title: "Open Source",
        description: "Tools and libraries we share with the developer community.",
        link: "/open-source",
        link_text: "Explore Repos",
    },
    Highlight {
        icon: "📖",
        title: "Research & Insights",
        description: "Deep dives into emerging technologies and methodologies.",
        link: "/blog",
        link_text: "Read Articles",
    },
    Highlight {
        icon: "👥",
        title: "The Builders",
        description: "Meet the team of researchers and engineers behind the lab.",
        link: "/team",
        link_text: "Meet the Team",
    },
];

/// Technology focus areas, each with its gradient modifier class.
pub static TECHNOLOGIES: [(&str, &str); 7] = [
    ("AI & Machine Learning", "tech-tile--primary"),
    ("Blockchain & Web3", "tech-tile--secondary"),
    ("IoT & Robotics", "tech-tile--accent"),
    ("AR/VR & XR", "tech-tile--primary-secondary"),
    ("Quantum Computing", "tech-tile--secondary-accent"),
    ("Biotech & Health", "tech-tile--accent-primary"),
    ("AgriTech", "tech-tile--primary-accent"),
];
