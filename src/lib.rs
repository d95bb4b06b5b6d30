//! Grid layout editor core: a model of CSS grid layouts, the placement rules
//! that keep items on the grid, snapshot-based undo/redo, and generators for
//! the CSS and HTML that reproduce a layout.
//!
//! Rendering, pointer capture and downloads belong to the embedding
//! application. It reports pointer samples and surface sizes to an
//! [`Editor`] and reads back configurations, preview styles and export files.

pub mod areas;
pub mod codegen;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod history;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod placement;
pub mod store;

pub use areas::{AreaMatrix, template_areas};
pub use codegen::{
    Breakpoint, CssFormat, ExportFile, ExportKind, GeneratorOptions, ViewMode, generate_css,
    generate_html,
};
pub use editor::{DragMode, EditOutcome, Editor, EditorConfig, GridField, ItemField};
pub use error::{GridError, Result};
pub use geometry::{Point, Size};
pub use history::{ConfigHistory, History, HistoryEntry};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{EditorMetrics, MetricSnapshot};
pub use model::{
    ContentAlignment, GapUnit, GridConfiguration, GridItem, ItemAlignment, ItemId, Template,
    TrackUnit,
};
pub use store::{ConfigStore, FileStore, MemoryStore};
