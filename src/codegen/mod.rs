//! Code generator: the configuration's textual projection.
//!
//! Everything here is a pure function of a configuration and a
//! [`GeneratorOptions`] value. Identical inputs always give byte-identical
//! output. Names are emitted as typed; no identifier escaping is applied.

pub mod css;
pub mod html;
mod options;
pub mod preview;

pub use css::{column_template, generate_css, row_template};
pub use html::generate_html;
pub use options::{
    Breakpoint, CssFormat, ExportFile, ExportKind, GeneratorOptions, RESPONSIVE_MAX_WIDTH_PX,
};
pub use preview::{
    Declarations, ViewMode, inline_style, preview_container_style, preview_item_style,
};
