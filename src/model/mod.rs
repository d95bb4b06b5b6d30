//! Grid model orchestrator.
//!
//! Callers import the configuration records and the occupancy queries from
//! here; the record definitions live in `core`, the unit and alignment
//! vocabularies in `units`, and the built-in layouts in `templates`.

mod core;
pub mod templates;
pub mod units;

pub use core::{
    DEFAULT_BACKGROUND, GridConfiguration, GridItem, ItemId, MAX_START_LINE, find_item, free_cells,
    is_occupied,
};
pub use templates::Template;
pub use units::{ContentAlignment, GapUnit, ItemAlignment, TrackUnit};
