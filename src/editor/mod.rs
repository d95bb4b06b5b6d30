//! Editing session: the single actor that mutates a grid.
//!
//! Every accepted edit produces a new configuration and exactly one history
//! checkpoint. Edits aimed at missing items, or that would change nothing, are
//! reported as [`EditOutcome::Ignored`] and leave the history alone. Undo and
//! redo only move the history cursor.

mod config;
mod drag;

use serde_json::Value;

use crate::codegen::{self, ExportFile, ExportKind, GeneratorOptions};
use crate::error::{GridError, Result};
use crate::geometry::{Point, Size};
use crate::history::ConfigHistory;
use crate::logging::{LogLevel, json_kv};
use crate::metrics::{EditorMetrics, MetricSnapshot};
use crate::model::{
    ContentAlignment, GapUnit, GridConfiguration, GridItem, ItemAlignment, ItemId, Template,
    TrackUnit, find_item,
};
use crate::placement::{self, parse_int_or};
use crate::store::{self, ConfigStore};

pub use config::EditorConfig;
pub use drag::DragMode;

use drag::{DragSession, DragStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Committed,
    Ignored,
}

impl EditOutcome {
    pub fn is_committed(self) -> bool {
        matches!(self, Self::Committed)
    }
}

/// Numeric item fields edited as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    StartCol,
    StartRow,
    EndCol,
    EndRow,
}

/// Numeric grid fields edited as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridField {
    Columns,
    Rows,
    Gap,
}

pub struct Editor {
    history: ConfigHistory,
    active_item: Option<ItemId>,
    options: GeneratorOptions,
    settings: EditorConfig,
    metrics: Option<EditorMetrics>,
    drag: Option<DragSession>,
    saved_fingerprint: Option<blake3::Hash>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(settings: EditorConfig) -> Self {
        Self::with_initial(GridConfiguration::default(), settings)
    }

    pub fn with_initial(initial: GridConfiguration, settings: EditorConfig) -> Self {
        let active_item = initial.items.first().map(|item| item.id.clone());
        let history = ConfigHistory::with_capacity(initial, settings.history_capacity);
        let metrics = settings.metrics_enabled.then(EditorMetrics::new);
        Self {
            history,
            active_item,
            options: GeneratorOptions::default(),
            settings,
            metrics,
            drag: None,
            saved_fingerprint: None,
        }
    }

    pub fn current(&self) -> &GridConfiguration {
        self.history.current()
    }

    pub fn history(&self) -> &ConfigHistory {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.settings
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut GeneratorOptions {
        &mut self.options
    }

    pub fn active_item(&self) -> Option<&GridItem> {
        self.active_item
            .as_deref()
            .and_then(|id| find_item(self.current(), id))
    }

    /// Select an item; stale ids are refused and the selection is kept.
    pub fn select(&mut self, id: &str) -> bool {
        if find_item(self.current(), id).is_none() {
            return false;
        }
        self.active_item = Some(id.to_string());
        true
    }

    // ── item edits ──────────────────────────────────────────────────────

    /// Add a one-cell item at `(col, row)` and select it.
    pub fn add_item(&mut self, col: i32, row: i32) -> GridItem {
        let (next, item) = placement::add_item(self.current(), col, row);
        self.active_item = Some(item.id.clone());
        self.commit("add_item", next);
        item
    }

    pub fn move_item(&mut self, id: &str, start_col: i32, start_row: i32) -> EditOutcome {
        self.edit_item("move_item", id, |config| {
            placement::move_item(config, id, start_col, start_row)
        })
    }

    /// Set an item's end lines; ends that would not stay after the start are ignored.
    pub fn resize_item(&mut self, id: &str, end_col: i32, end_row: i32) -> EditOutcome {
        let collapses = find_item(self.current(), id)
            .is_some_and(|item| end_col <= item.start_col || end_row <= item.start_row);
        if collapses {
            return self.ignore("resize_item", "collapsed_span");
        }
        self.edit_item("resize_item", id, |config| {
            placement::resize_item(config, id, end_col, end_row)
        })
    }

    pub fn set_item_start(&mut self, id: &str, start_col: i32, start_row: i32) -> EditOutcome {
        self.edit_item("set_item_start", id, |config| {
            placement::set_item_start(config, id, start_col, start_row)
        })
    }

    pub fn set_item_end(&mut self, id: &str, end_col: i32, end_row: i32) -> EditOutcome {
        self.edit_item("set_item_end", id, |config| {
            placement::set_item_end(config, id, end_col, end_row)
        })
    }

    pub fn rename_item(&mut self, id: &str, name: &str) -> EditOutcome {
        self.edit_item("rename_item", id, |config| {
            placement::rename_item(config, id, name)
        })
    }

    pub fn recolor_item(&mut self, id: &str, color: &str) -> EditOutcome {
        self.edit_item("recolor_item", id, |config| {
            placement::recolor_item(config, id, color)
        })
    }

    /// Apply text typed into one of an item's line fields.
    ///
    /// Start fields default to 1 and push the end along; end fields default
    /// to 2 and are ignored unless they stay after the start.
    pub fn edit_item_field(&mut self, id: &str, field: ItemField, input: &str) -> EditOutcome {
        let Some(item) = find_item(self.current(), id).cloned() else {
            return self.ignore("edit_item_field", "unknown_item");
        };
        self.edit_item("edit_item_field", id, |config| match field {
            ItemField::StartCol => {
                placement::set_item_start(config, id, parse_int_or(input, 1), item.start_row)
            }
            ItemField::StartRow => {
                placement::set_item_start(config, id, item.start_col, parse_int_or(input, 1))
            }
            ItemField::EndCol => {
                placement::set_item_end(config, id, parse_int_or(input, 2), item.end_row)
            }
            ItemField::EndRow => {
                placement::set_item_end(config, id, item.end_col, parse_int_or(input, 2))
            }
        })
    }

    /// Delete an item. The last remaining item cannot be deleted.
    pub fn delete_item(&mut self, id: &str) -> EditOutcome {
        if find_item(self.current(), id).is_none() {
            return self.ignore("delete_item", "unknown_item");
        }
        if self.current().items.len() <= 1 {
            return self.ignore("delete_item", "last_item");
        }
        let next = placement::delete_item(self.current(), id);
        self.commit("delete_item", next)
    }

    // ── grid edits ──────────────────────────────────────────────────────

    /// Apply text typed into a grid field. Counts default to 1, the gap to 0.
    pub fn edit_grid_field(&mut self, field: GridField, input: &str) -> EditOutcome {
        self.edit_grid("edit_grid_field", |config| match field {
            GridField::Columns => placement::set_columns_from_input(config, input),
            GridField::Rows => placement::set_rows_from_input(config, input),
            GridField::Gap => placement::set_gap_from_input(config, input),
        })
    }

    /// Counts are kept within `1..=placement::MAX_TRACKS`.
    pub fn set_columns(&mut self, columns: u32) -> EditOutcome {
        self.edit_grid("set_columns", |config| GridConfiguration {
            columns: placement::track_count_in_range(columns),
            ..config.clone()
        })
    }

    pub fn set_rows(&mut self, rows: u32) -> EditOutcome {
        self.edit_grid("set_rows", |config| GridConfiguration {
            rows: placement::track_count_in_range(rows),
            ..config.clone()
        })
    }

    /// Negative or non-finite gaps become 0.
    pub fn set_gap(&mut self, gap: f64) -> EditOutcome {
        let gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
        self.edit_grid("set_gap", |config| GridConfiguration {
            gap,
            ..config.clone()
        })
    }

    pub fn set_gap_unit(&mut self, unit: GapUnit) -> EditOutcome {
        self.edit_grid("set_gap_unit", |config| GridConfiguration {
            gap_unit: unit,
            ..config.clone()
        })
    }

    pub fn set_column_unit(&mut self, unit: TrackUnit) -> EditOutcome {
        self.edit_grid("set_column_unit", |config| GridConfiguration {
            column_unit: unit,
            ..config.clone()
        })
    }

    pub fn set_row_unit(&mut self, unit: TrackUnit) -> EditOutcome {
        self.edit_grid("set_row_unit", |config| GridConfiguration {
            row_unit: unit,
            ..config.clone()
        })
    }

    pub fn set_justify_items(&mut self, value: ItemAlignment) -> EditOutcome {
        self.edit_grid("set_justify_items", |config| GridConfiguration {
            justify_items: value,
            ..config.clone()
        })
    }

    pub fn set_align_items(&mut self, value: ItemAlignment) -> EditOutcome {
        self.edit_grid("set_align_items", |config| GridConfiguration {
            align_items: value,
            ..config.clone()
        })
    }

    pub fn set_justify_content(&mut self, value: ContentAlignment) -> EditOutcome {
        self.edit_grid("set_justify_content", |config| GridConfiguration {
            justify_content: value,
            ..config.clone()
        })
    }

    pub fn set_align_content(&mut self, value: ContentAlignment) -> EditOutcome {
        self.edit_grid("set_align_content", |config| GridConfiguration {
            align_content: value,
            ..config.clone()
        })
    }

    /// Replace the configuration with a template. Always one checkpoint.
    pub fn load_template(&mut self, template: Template) {
        let next = template.configuration();
        self.active_item = next.items.first().map(|item| item.id.clone());
        self.commit("load_template", next);
    }

    pub fn load_template_key(&mut self, key: &str) -> Result<()> {
        let template = key.parse::<Template>()?;
        self.load_template(template);
        Ok(())
    }

    /// Return to the default configuration. Always one checkpoint.
    pub fn reset(&mut self) {
        let next = GridConfiguration::default();
        self.active_item = next.items.first().map(|item| item.id.clone());
        self.commit("reset", next);
    }

    // ── history ─────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> &GridConfiguration {
        self.navigate(true)
    }

    pub fn redo(&mut self) -> &GridConfiguration {
        self.navigate(false)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn navigate(&mut self, undo: bool) -> &GridConfiguration {
        let before = self.history.cursor();
        if undo {
            self.history.undo();
        } else {
            self.history.redo();
        }
        let moved = self.history.cursor() != before;
        if let Some(metrics) = self.metrics.as_mut() {
            metrics.record_navigation(undo, moved);
        }
        if moved {
            self.drag = None;
            self.reconcile_selection();
            self.log(
                LogLevel::Debug,
                if undo { "undo" } else { "redo" },
                [
                    json_kv("cursor", self.history.cursor()),
                    json_kv("history_len", self.history.len()),
                ],
            );
        }
        self.history.current()
    }

    // ── pointer gestures ────────────────────────────────────────────────

    /// Start dragging `id` from `pointer`. The item becomes the active one.
    pub fn begin_drag(&mut self, id: &str, mode: DragMode, pointer: Point) -> bool {
        if !self.select(id) {
            return false;
        }
        self.drag = Some(DragSession::new(id.to_string(), mode, pointer));
        true
    }

    /// Feed a pointer sample; `surface` is the on-screen size of the whole grid.
    ///
    /// Each sample that crosses at least one cell, and whose clamped target
    /// differs from the item's geometry, commits one checkpoint.
    pub fn drag_to(&mut self, pointer: Point, surface: Size) -> EditOutcome {
        let Some(mut session) = self.drag.take() else {
            return EditOutcome::Ignored;
        };
        let Some(item) = find_item(self.current(), &session.item_id).cloned() else {
            return self.ignore("drag", "unknown_item");
        };

        let step = session.step(&item, self.current(), pointer, surface);
        let id = session.item_id.clone();
        self.drag = Some(session);

        match step {
            None => EditOutcome::Ignored,
            Some(DragStep::MoveTo(col, row)) => {
                let next = placement::move_item(self.current(), &id, col, row);
                self.commit("drag_move", next)
            }
            Some(DragStep::ResizeTo(col, row)) => {
                let next = placement::resize_item(self.current(), &id, col, row);
                self.commit("drag_resize", next)
            }
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // ── generation ──────────────────────────────────────────────────────

    pub fn generate_css(&mut self) -> String {
        self.record(EditorMetrics::record_generation);
        codegen::generate_css(self.current(), &self.options)
    }

    pub fn generate_html(&mut self) -> String {
        self.record(EditorMetrics::record_generation);
        codegen::generate_html(self.current())
    }

    pub fn export(&mut self, kind: ExportKind) -> ExportFile {
        let contents = match kind {
            ExportKind::Css => self.generate_css(),
            ExportKind::Html => self.generate_html(),
        };
        self.log(
            LogLevel::Info,
            "export",
            [json_kv("file", kind.file_name()), json_kv("bytes", contents.len())],
        );
        ExportFile {
            kind,
            file_name: kind.file_name(),
            contents,
        }
    }

    // ── persistence ─────────────────────────────────────────────────────

    pub fn save(&mut self, store: &dyn ConfigStore) -> Result<()> {
        let blob = store::encode(self.current())?;
        store.set(&self.settings.storage_key, &blob)?;
        self.saved_fingerprint = Some(store::fingerprint(self.current())?);
        self.record(EditorMetrics::record_save);
        self.log(
            LogLevel::Info,
            "configuration_saved",
            [
                json_kv("key", self.settings.storage_key.as_str()),
                json_kv("bytes", blob.len()),
            ],
        );
        Ok(())
    }

    /// Replace the configuration with the stored one, as one checkpoint.
    ///
    /// A missing or malformed blob is reported and the session is left as it was.
    pub fn load(&mut self, store: &dyn ConfigStore) -> Result<()> {
        let key = self.settings.storage_key.clone();
        let blob = store
            .get(&key)?
            .ok_or_else(|| GridError::NoSavedConfiguration(key.clone()))
            .inspect_err(|err| self.log_failure("load_failed", err))?;
        let config =
            store::decode(&blob).inspect_err(|err| self.log_failure("load_failed", err))?;

        self.saved_fingerprint = Some(store::fingerprint(&config)?);
        self.active_item = config.items.first().map(|item| item.id.clone());
        self.record(EditorMetrics::record_load);
        self.commit("load", config);
        Ok(())
    }

    /// True until the first save or load, and whenever the configuration differs from it.
    pub fn has_unsaved_changes(&self) -> bool {
        match (self.saved_fingerprint, store::fingerprint(self.current())) {
            (Some(saved), Ok(current)) => saved != current,
            _ => true,
        }
    }

    // ── metrics ─────────────────────────────────────────────────────────

    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        self.metrics
            .as_ref()
            .map(|metrics| metrics.snapshot(self.history.len()))
    }

    /// Log the current counters at info level.
    pub fn emit_metrics(&self) {
        let (Some(snapshot), Some(logger)) = (self.metrics_snapshot(), &self.settings.logger) else {
            return;
        };
        let _ = logger.log_event(snapshot.to_log_event(&self.settings.log_target));
    }

    // ── internals ───────────────────────────────────────────────────────

    fn edit_item(
        &mut self,
        action: &'static str,
        id: &str,
        apply: impl FnOnce(&GridConfiguration) -> GridConfiguration,
    ) -> EditOutcome {
        if find_item(self.current(), id).is_none() {
            return self.ignore(action, "unknown_item");
        }
        self.edit_grid(action, apply)
    }

    fn edit_grid(
        &mut self,
        action: &'static str,
        apply: impl FnOnce(&GridConfiguration) -> GridConfiguration,
    ) -> EditOutcome {
        let next = apply(self.current());
        if next == *self.current() {
            return self.ignore(action, "unchanged");
        }
        self.commit(action, next)
    }

    fn commit(&mut self, action: &'static str, next: GridConfiguration) -> EditOutcome {
        let sequence = self.history.commit(next).sequence();
        self.reconcile_selection();
        self.record(EditorMetrics::record_commit);
        self.log(
            LogLevel::Debug,
            "commit",
            [
                json_kv("action", action),
                json_kv("sequence", sequence),
                json_kv("items", self.current().items.len()),
                json_kv("history_len", self.history.len()),
            ],
        );
        EditOutcome::Committed
    }

    fn ignore(&mut self, action: &'static str, reason: &'static str) -> EditOutcome {
        self.record(EditorMetrics::record_ignored);
        self.log(
            LogLevel::Trace,
            "edit_ignored",
            [json_kv("action", action), json_kv("reason", reason)],
        );
        EditOutcome::Ignored
    }

    /// Keep the selection pointing at an existing item, falling back to the first one.
    fn reconcile_selection(&mut self) {
        let current = self.history.current();
        let still_there = self
            .active_item
            .as_deref()
            .is_some_and(|id| find_item(current, id).is_some());
        if !still_there {
            self.active_item = current.items.first().map(|item| item.id.clone());
        }
    }

    fn record(&mut self, apply: impl FnOnce(&mut EditorMetrics)) {
        if let Some(metrics) = self.metrics.as_mut() {
            apply(metrics);
        }
    }

    fn log_failure(&self, message: &str, err: &GridError) {
        self.log(LogLevel::Warn, message, [json_kv("error", err.to_string())]);
    }

    fn log<const N: usize>(&self, level: LogLevel, message: &str, fields: [(String, Value); N]) {
        if let Some(logger) = &self.settings.logger {
            let _ = logger.log_with_fields(level, &self.settings.log_target, message, fields);
        }
    }
}
