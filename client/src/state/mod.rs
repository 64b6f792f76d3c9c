//! Application state types.
//!
//! ARCHITECTURE
//! ============
//! Plain structs owned by Leptos signals. `ui` is provided app-wide through
//! context; catalog filter state lives in `crate::catalog` and is owned by the
//! page that renders it; `contact` is owned by the contact page.

pub mod contact;
pub mod ui;
