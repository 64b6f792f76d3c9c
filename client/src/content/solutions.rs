//! Solutions catalog: live prototypes and experiments.

#[cfg(test)]
#[path = "solutions_test.rs"]
mod solutions_test;

use crate::catalog::{CatalogItem, CategoryMap};

/// Maturity badge on a solution card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolutionStatus {
    Live,
    Beta,
    Experiment,
}

impl SolutionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Beta => "beta",
            Self::Experiment => "experiment",
        }
    }

    /// Badge modifier class.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Live => "status-badge status-badge--live",
            Self::Beta => "status-badge status-badge--beta",
            Self::Experiment => "status-badge status-badge--experiment",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub status: SolutionStatus,
}

impl CatalogItem for Solution {
    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }

    fn description(&self) -> &str {
        self.description
    }

    fn tags(&self) -> &[&str] {
        self.tags
    }
}

/// Filter labels for the solutions page.
pub const CATEGORY_MAP: CategoryMap = CategoryMap::new(&[
    ("AI", &["ai", "ml", "nlu", "voice"]),
    ("Web3", &["web3", "blockchain", "identity"]),
    ("Privacy", &["privacy", "identity"]),
    ("Edge", &["edge", "iot", "distributed"]),
    ("Quantum", &["quantum", "simulation"]),
]);

pub static SOLUTIONS: [Solution; 6] = [
    Solution {
        id: 1,
        title: "Neural Interface Dashboard",
        description: "Real-time monitoring and control system for AI model performance with predictive analytics and automated optimization suggestions.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
        tags: &["AI/ML", "Dashboard", "Analytics"],
        status: SolutionStatus::Live,
    },
    Solution {
        id: 2,
        title: "Quantum Compute Simulator",
        description: "Browser-based quantum circuit simulator with visual gate manipulation, state analysis, and educational tutorials.",
        image: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=600&h=400&fit=crop",
        tags: &["Quantum", "Simulation", "WebGL"],
        status: SolutionStatus::Beta,
    },
    Solution {
        id: 3,
        title: "Decentralized Identity",
        description: "Self-sovereign identity management using blockchain with zero-knowledge proof integration for privacy-preserving verification.",
        image: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=600&h=400&fit=crop",
        tags: &["Web3", "Privacy", "Identity"],
        status: SolutionStatus::Live,
    },
    Solution {
        id: 4,
        title: "Edge ML Platform",
        description: "Deploy and manage machine learning models at the edge with real-time inference capabilities and automatic model optimization.",
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=600&h=400&fit=crop",
        tags: &["Edge", "ML", "IoT"],
        status: SolutionStatus::Experiment,
    },
    Solution {
        id: 5,
        title: "Voice AI Assistant SDK",
        description: "Build conversational AI experiences with our voice-first SDK featuring natural language understanding and multi-language support.",
        image: "https://images.unsplash.com/photo-1589254065878-42c9da997008?w=600&h=400&fit=crop",
        tags: &["Voice", "NLU", "SDK"],
        status: SolutionStatus::Beta,
    },
    Solution {
        id: 6,
        title: "Federated Learning Framework",
        description: "Privacy-preserving machine learning that trains models across decentralized data without exposing raw information.",
        image: "https://images.unsplash.com/photo-1516110833967-0b5716ca1387?w=600&h=400&fit=crop",
        tags: &["Privacy", "ML", "Distributed"],
        status: SolutionStatus::Experiment,
    },
];
