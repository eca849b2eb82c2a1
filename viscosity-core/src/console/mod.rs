//! Terminal presentation
//!
//! Renders connection listings and resolves interactive selections. Both are
//! generic over their reader and writer so they can run without a terminal.

pub mod selector;
pub mod status;

// Public re-exports
pub use selector::{resolve_selection, select_connection, Selection};
pub use status::render_status;
