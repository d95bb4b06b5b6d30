//! Placement engine: edit intents in, geometrically valid items out.
//!
//! Every operation here is total. Missing ids leave the configuration as it
//! was and out-of-range values are clamped, so an interrupted drag or a
//! half-typed number never takes the session down.

mod core;
pub mod drag;
pub mod fields;

pub use core::{
    add_item, clamp_move, clamp_resize, delete_item, move_item, recolor_item, rename_item,
    resize_item,
};
pub use drag::{DragTracker, drag_delta};
pub use fields::{
    MAX_TRACKS, parse_int_or, set_columns_from_input, set_gap_from_input, set_item_end,
    set_item_start, set_rows_from_input, track_count_in_range,
};
