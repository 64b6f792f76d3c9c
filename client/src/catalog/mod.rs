//! Client-side catalog filtering for the solutions and open-source listings.
//!
//! DESIGN
//! ======
//! Filtering is a pure function over borrowed, immutable records. Pages own a
//! `FilterState` signal and wrap `filter` in a `Memo`, so the visible subset is
//! recomputed only when the search term or the selected label changes.
//!
//! Each catalog page supplies its own `CategoryMap`; the tables are separate
//! configuration data rather than one shared scheme.

pub mod filter;
pub mod mapping;
pub mod state;

pub use filter::{CatalogItem, filter, filter_labels, matches_category, matches_search, source_index};
pub use mapping::CategoryMap;
pub use state::{ALL_FILTER, FilterState};
