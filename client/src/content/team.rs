//! Team roster.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub avatar: &'static str,
    pub skills: &'static [&'static str],
    pub linkedin: Option<&'static str>,
    pub twitter: Option<&'static str>,
    pub github: Option<&'static str>,
}

/// A member's profile link with its network label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileLink {
    pub network: &'static str,
    pub href: &'static str,
}

impl TeamMember {
    /// Present profile links in LinkedIn, Twitter, GitHub order.
    #[must_use]
    pub fn profile_links(&self) -> Vec<ProfileLink> {
        [("LinkedIn", self.linkedin), ("Twitter", self.twitter), ("GitHub", self.github)]
            .into_iter()
            .filter_map(|(network, href)| href.map(|href| ProfileLink { network, href }))
            .collect()
    }
}

pub static TEAM: [TeamMember; 6] = [
    TeamMember {
        id: 1,
        name: "Dr. Amara Okafor",
        role: "Lab Director",
        bio: "Former research lead at DeepMind. Passionate about making advanced AI accessible and ethical. Published 40+ papers on ML and quantum computing.",
        avatar: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&h=400&fit=crop&crop=face",
        skills: &["AI/ML", "Quantum Computing", "Research Leadership"],
        linkedin: Some("#"),
        twitter: Some("#"),
        github: None,
    },
    TeamMember {
        id: 2,
        name: "Marcus Chen",
        role: "Lead Systems Engineer",
        bio: "10+ years building high-performance systems. Previously at Cloudflare and Fastly. Rust evangelist and WebAssembly pioneer.",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
        skills: &["Rust", "Systems Design", "WebAssembly"],
        linkedin: Some("#"),
        twitter: None,
        github: Some("#"),
    },
    TeamMember {
        id: 3,
        name: "Zara Mbeki",
        role: "Principal Research Scientist",
        bio: "Cryptography expert specializing in zero-knowledge proofs. Former academic at MIT. Building the future of privacy-first applications.",
        avatar: "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=400&h=400&fit=crop&crop=face",
        skills: &["Cryptography", "Privacy", "ZK Proofs"],
        linkedin: None,
        twitter: Some("#"),
        github: Some("#"),
    },
    TeamMember {
        id: 4,
        name: "Kai Tanaka",
        role: "Creative Technologist",
        bio: "Bridging art and technology. Previously led design engineering at Figma. Loves making complex things beautiful and intuitive.",
        avatar: "https://images.unsplash.com/photo-1539571696357-5a69c17a67c6?w=400&h=400&fit=crop&crop=face",
        skills: &["Visualization", "WebGL", "Design Systems"],
        linkedin: Some("#"),
        twitter: Some("#"),
        github: Some("#"),
    },
    TeamMember {
        id: 5,
        name: "Dr. Elena Vasquez",
        role: "ML Research Lead",
        bio: "Specializing in federated learning and privacy-preserving ML. Former Google Brain researcher. Published extensively on distributed systems.",
        avatar: "https://images.unsplash.com/photo-1594744803329-e58b31de8bf5?w=400&h=400&fit=crop&crop=face",
        skills: &["Federated Learning", "PyTorch", "Privacy ML"],
        linkedin: Some("#"),
        twitter: None,
        github: Some("#"),
    },
    TeamMember {
        id: 6,
        name: "Jordan Williams",
        role: "Platform Engineer",
        bio: "Infrastructure and DevOps expert. Built platforms at scale for Spotify and Stripe. Kubernetes contributor and open source advocate.",
        avatar: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400&h=400&fit=crop&crop=face",
        skills: &["Kubernetes", "DevOps", "Cloud Architecture"],
        linkedin: Some("#"),
        twitter: None,
        github: Some("#"),
    },
];
