//! Contact details and social links.

pub const EMAIL: &str = "labs@alkebulant.com";
pub const LOCATION: &str = "Remote-first, Global";
pub const RESPONSE_TIME: &str = "Usually within 24 hours";
pub const INTRO: &str = "Whether you're interested in partnering, contributing to our open source projects, or just want to say hi, we're always happy to connect.";

pub const SENT_TITLE: &str = "Message sent!";
pub const SENT_BODY: &str = "We'll get back to you within 24 hours.";

pub struct SocialLink {
    pub icon: &'static str,
    pub href: &'static str,
    pub label: &'static str,
    pub handle: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { icon: "𝕏", href: "https://x.com/Alkebulantlabs", label: "Twitter", handle: "@Alkebulantlabs" },
    SocialLink { icon: "⌥", href: "#", label: "GitHub", handle: "cypherpulse" },
    SocialLink { icon: "in", href: "#", label: "LinkedIn", handle: "Alkebulant Labs" },
    SocialLink { icon: "✉", href: "mailto:alkebulantlab@gmail.com", label: "Email", handle: "alkebulantlab@gmail.com" },
];
