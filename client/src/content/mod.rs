//! Static site content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page renders from the arrays in these modules. They are defined once,
//! never mutated, and shared by reference with the views that render them.

pub mod blog;
pub mod contact;
pub mod home;
pub mod repositories;
pub mod resources;
pub mod solutions;
pub mod team;

pub const LAB_NAME: &str = "Alkebulant Labs";
pub const PARENT_NAME: &str = "Alkebulant";
pub const COPYRIGHT: &str = "© 2026 Alkebulant Labs – Part of Alkebulant";
pub const LOGO_SRC: &str = "/logo.svg";
