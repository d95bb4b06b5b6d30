//! Crate-wide error types.
//!
//! Interactive edits never fail; only the persistence and template boundaries
//! surface errors, and the editor state is left untouched when they do.

mod types;

pub use types::{GridError, Result};
