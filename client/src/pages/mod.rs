//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state (catalog filters, form state) and
//! delegates rendering details to `components`.

pub mod blog;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod open_source;
pub mod resources;
pub mod solutions;
pub mod team;
