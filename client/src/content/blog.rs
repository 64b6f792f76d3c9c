//! Blog posts, newest first.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub featured: bool,
}

pub static BLOG_POSTS: [BlogPost; 6] = [
    BlogPost {
        id: 1,
        title: "The Future of Edge Computing in AI Applications",
        excerpt: "Exploring how edge computing is revolutionizing the deployment of AI models, reducing latency and enabling real-time inference at scale. We dive into architecture patterns and real-world implementations.",
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800&h=500&fit=crop",
        date: "Jan 15, 2026",
        read_time: "8 min read",
        category: "Research",
        featured: true,
    },
    BlogPost {
        id: 2,
        title: "Building Privacy-First Applications with ZK Proofs",
        excerpt: "A deep dive into implementing zero-knowledge proofs for building applications that protect user privacy without sacrificing functionality.",
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=600&h=400&fit=crop",
        date: "Jan 10, 2026",
        read_time: "12 min read",
        category: "Tutorial",
        featured: false,
    },
    BlogPost {
        id: 3,
        title: "Quantum Computing: From Theory to Practice",
        excerpt: "Our journey building a browser-based quantum simulator and the lessons learned about making quantum computing accessible.",
        image: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=600&h=400&fit=crop",
        date: "Jan 5, 2026",
        read_time: "10 min read",
        category: "Case Study",
        featured: false,
    },
    BlogPost {
        id: 4,
        title: "Federated Learning: Training Models Without Data Sharing",
        excerpt: "How we're implementing privacy-preserving machine learning that keeps sensitive data where it belongs.",
        image: "https://images.unsplash.com/photo-1516110833967-0b5716ca1387?w=600&h=400&fit=crop",
        date: "Dec 28, 2025",
        read_time: "7 min read",
        category: "Research",
        featured: false,
    },
    BlogPost {
        id: 5,
        title: "WebAssembly for High-Performance ML in the Browser",
        excerpt: "Pushing the limits of browser-based machine learning with WebAssembly and our edge ML runtime.",
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=600&h=400&fit=crop",
        date: "Dec 20, 2025",
        read_time: "9 min read",
        category: "Tutorial",
        featured: false,
    },
    BlogPost {
        id: 6,
        title: "Designing for Voice-First Interfaces",
        excerpt: "UX principles and technical considerations for building natural conversational AI experiences.",
        image: "https://images.unsplash.com/photo-1589254065878-42c9da997008?w=600&h=400&fit=crop",
        date: "Dec 15, 2025",
        read_time: "6 min read",
        category: "Design",
        featured: false,
    },
];

/// Split posts into the first featured post and the remaining posts in order.
#[must_use]
pub fn split_featured(posts: &[BlogPost]) -> (Option<&BlogPost>, Vec<&BlogPost>) {
    let featured = posts.iter().find(|post| post.featured);
    let regular = posts.iter().filter(|post| !post.featured).collect();
    (featured, regular)
}
