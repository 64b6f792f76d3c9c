//! Open-source repository catalog.

#[cfg(test)]
#[path = "repositories_test.rs"]
mod repositories_test;

use crate::catalog::{CatalogItem, CategoryMap};

pub const GITHUB_ORG_URL: &str = "https://github.com/alkebulant-labs";

/// A public repository card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repository {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub stars: u32,
    pub forks: u32,
    pub language: &'static str,
    pub language_color: &'static str,
    pub topics: &'static [&'static str],
}

impl Repository {
    #[must_use]
    pub fn url(&self) -> String {
        format!("{GITHUB_ORG_URL}/{}", self.name)
    }
}

impl CatalogItem for Repository {
    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn tags(&self) -> &[&str] {
        self.topics
    }

    fn kind(&self) -> Option<&str> {
        Some(self.language)
    }
}

/// Filter labels for the open-source page. Language labels carry no tag
/// substrings and match through the repository language instead.
pub const CATEGORY_MAP: CategoryMap = CategoryMap::new(&[
    ("AI", &["ai", "machine-learning", "ml", "deep-learning", "nlu", "pytorch"]),
    ("Privacy", &["privacy", "cryptography", "zk", "identity"]),
    ("Edge", &["edge", "webassembly", "onnx", "distributed"]),
    ("Education", &["education", "visualization", "simulation"]),
    ("Rust", &[]),
    ("TypeScript", &[]),
    ("Python", &[]),
    ("Go", &[]),
]);

pub static REPOSITORIES: [Repository; 6] = [
    Repository {
        id: 1,
        name: "quantum-sim",
        description: "A lightweight quantum circuit simulator for the browser with WebGL acceleration. Perfect for education and experimentation.",
        stars: 2340,
        forks: 189,
        language: "TypeScript",
        language_color: "#3178c6",
        topics: &["quantum", "simulation", "webgl", "education"],
    },
    Repository {
        id: 2,
        name: "edge-ml-runtime",
        description: "Efficient ML runtime for edge devices with WebAssembly and ONNX support. Run models anywhere with minimal footprint.",
        stars: 1890,
        forks: 156,
        language: "Rust",
        language_color: "#dea584",
        topics: &["machine-learning", "webassembly", "edge", "onnx"],
    },
    Repository {
        id: 3,
        name: "zk-identity",
        description: "Zero-knowledge proof library for privacy-preserving identity verification. Built for the modern web.",
        stars: 1456,
        forks: 98,
        language: "Go",
        language_color: "#00add8",
        topics: &["cryptography", "privacy", "identity", "zk-proofs"],
    },
    Repository {
        id: 4,
        name: "neural-viz",
        description: "Interactive neural network visualization toolkit for education and debugging. See your models come to life.",
        stars: 987,
        forks: 67,
        language: "Python",
        language_color: "#3572A5",
        topics: &["visualization", "deep-learning", "education", "pytorch"],
    },
    Repository {
        id: 5,
        name: "voice-sdk",
        description: "Build conversational AI experiences with natural language understanding. Multi-platform, multi-language.",
        stars: 756,
        forks: 54,
        language: "TypeScript",
        language_color: "#3178c6",
        topics: &["voice", "nlu", "sdk", "conversational-ai"],
    },
    Repository {
        id: 6,
        name: "federated-learn",
        description: "Privacy-preserving federated learning framework. Train models without centralizing data.",
        stars: 623,
        forks: 41,
        language: "Python",
        language_color: "#3572A5",
        topics: &["federated-learning", "privacy", "distributed", "ml"],
    },
];

/// Thousands-separated star count, as shown on the cards.
#[must_use]
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
