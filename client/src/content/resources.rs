//! Downloadable and linked resources.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Paper,
    Docs,
    Video,
    Download,
}

impl ResourceKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Paper => "Research Paper",
            Self::Docs => "Documentation",
            Self::Video => "Video Tutorial",
            Self::Download => "Download",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Paper => "📄",
            Self::Docs => "📘",
            Self::Video => "🎬",
            Self::Download => "⬇",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ResourceKind,
    pub link: &'static str,
    pub date: Option<&'static str>,
}

pub static RESOURCES: [Resource; 8] = [
    Resource {
        id: 1,
        title: "Edge ML Architecture Guide",
        description: "Comprehensive guide on designing ML systems for edge deployment. Covers architecture patterns, optimization techniques, and deployment strategies.",
        kind: ResourceKind::Docs,
        link: "#",
        date: None,
    },
    Resource {
        id: 2,
        title: "Quantum Computing Primer",
        description: "Introduction to quantum computing concepts for software developers. No physics background required.",
        kind: ResourceKind::Paper,
        link: "#",
        date: Some("Dec 2025"),
    },
    Resource {
        id: 3,
        title: "Building with ZK Proofs",
        description: "Video series on implementing zero-knowledge proofs in applications. From theory to production.",
        kind: ResourceKind::Video,
        link: "#",
        date: None,
    },
    Resource {
        id: 4,
        title: "Labs Starter Kit",
        description: "Boilerplate code and templates to kickstart your experiments. Includes our recommended toolchain.",
        kind: ResourceKind::Download,
        link: "#",
        date: None,
    },
    Resource {
        id: 5,
        title: "Federated Learning Whitepaper",
        description: "Technical deep-dive into our federated learning framework architecture and privacy guarantees.",
        kind: ResourceKind::Paper,
        link: "#",
        date: Some("Nov 2025"),
    },
    Resource {
        id: 6,
        title: "Voice SDK Documentation",
        description: "Complete API reference and integration guides for our conversational AI SDK.",
        kind: ResourceKind::Docs,
        link: "#",
        date: None,
    },
    Resource {
        id: 7,
        title: "Neural Network Visualization Tutorial",
        description: "Step-by-step video guide to using our neural-viz toolkit for model debugging and education.",
        kind: ResourceKind::Video,
        link: "#",
        date: None,
    },
    Resource {
        id: 8,
        title: "Identity Verification SDK",
        description: "Privacy-first identity verification components ready to integrate into your application.",
        kind: ResourceKind::Download,
        link: "#",
        date: None,
    },
];
