//! User interface module - terminal output.
//!
//! - `formatter` - Rendering of versions and comparison results

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{display_bump, display_error, render_ordering, render_tuple, render_version};
