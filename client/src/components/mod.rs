//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and content cards while reading shared UI
//! state from Leptos context providers.

pub mod blog_card;
pub mod catalog_controls;
pub mod footer;
pub mod hero;
pub mod logo;
pub mod navbar;
pub mod page_layout;
pub mod repo_card;
pub mod resource_card;
pub mod reveal;
pub mod section_title;
pub mod solution_card;
pub mod team_card;
