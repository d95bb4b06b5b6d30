use serde::{Deserialize, Serialize};

use super::units::{ContentAlignment, GapUnit, ItemAlignment, TrackUnit};

/// Stable item identifier.
pub type ItemId = String;

/// Largest start line an item can take and still span a cell.
pub const MAX_START_LINE: i32 = i32::MAX - 1;

/// Background used when an item carries no colour of its own.
pub const DEFAULT_BACKGROUND: &str = "#f0f4f8";

/// An item placed on the grid.
///
/// Lines are 1-based: the item covers columns `[start_col, end_col)` and rows
/// `[start_row, end_row)`. Coordinates are not clamped here; out-of-range
/// placements are tolerated and clipped wherever they are consumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    pub start_col: i32,
    pub start_row: i32,
    pub end_col: i32,
    pub end_row: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl GridItem {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        (start_col, start_row): (i32, i32),
        (end_col, end_row): (i32, i32),
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_col,
            start_row,
            end_col,
            end_row,
            background_color: None,
        }
    }

    /// Single-cell item anchored at `(col, row)`.
    ///
    /// Anchors are kept below `i32::MAX` so the span always holds one cell.
    pub fn cell(id: impl Into<ItemId>, name: impl Into<String>, col: i32, row: i32) -> Self {
        let (col, row) = (col.min(MAX_START_LINE), row.min(MAX_START_LINE));
        Self::new(id, name, (col, row), (col + 1, row + 1))
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn width(&self) -> i32 {
        self.end_col.saturating_sub(self.start_col)
    }

    pub fn height(&self) -> i32 {
        self.end_row.saturating_sub(self.start_row)
    }

    /// True when the 1x1 cell at `(col, row)` lies inside the span.
    pub fn covers(&self, col: i32, row: i32) -> bool {
        col >= self.start_col && col < self.end_col && row >= self.start_row && row < self.end_row
    }

    /// Identifier used in selectors, area names and class attributes.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    pub fn resolved_background(&self) -> &str {
        self.background_color
            .as_deref()
            .filter(|color| !color.is_empty())
            .unwrap_or(DEFAULT_BACKGROUND)
    }

    /// Hover description, e.g. `header: (1,1) to (3,1)`; end lines are shown inclusive.
    pub fn span_label(&self) -> String {
        format!(
            "{}: ({},{}) to ({},{})",
            self.display_name(),
            self.start_col,
            self.start_row,
            self.end_col.saturating_sub(1),
            self.end_row.saturating_sub(1)
        )
    }
}

/// Complete description of a grid and its items.
///
/// Item order doubles as z-order: later items win where spans overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfiguration {
    pub columns: u32,
    pub rows: u32,
    pub gap: f64,
    pub gap_unit: GapUnit,
    pub column_unit: TrackUnit,
    pub row_unit: TrackUnit,
    pub items: Vec<GridItem>,
    #[serde(default)]
    pub justify_items: ItemAlignment,
    #[serde(default)]
    pub align_items: ItemAlignment,
    #[serde(default)]
    pub justify_content: ContentAlignment,
    #[serde(default)]
    pub align_content: ContentAlignment,
    /// Number minted into the next `item-N` identifier. Never decreases.
    #[serde(default)]
    pub next_item_number: u32,
}

impl Default for GridConfiguration {
    fn default() -> Self {
        Self {
            columns: 5,
            rows: 5,
            gap: 16.0,
            gap_unit: GapUnit::Px,
            column_unit: TrackUnit::Fr,
            row_unit: TrackUnit::Auto,
            items: vec![GridItem::cell("item-1", "item1", 1, 1)],
            justify_items: ItemAlignment::Stretch,
            align_items: ItemAlignment::Stretch,
            justify_content: ContentAlignment::Start,
            align_content: ContentAlignment::Start,
            next_item_number: 2,
        }
    }
}

impl GridConfiguration {
    /// Raise `next_item_number` past every id already in use.
    ///
    /// Blobs written without the counter, or edited by hand, would otherwise
    /// mint identifiers that collide with existing items.
    pub fn reconcile_item_counter(&mut self) {
        let from_ids = self
            .items
            .iter()
            .filter_map(|item| item.id.strip_prefix("item-"))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .map(|n| n.saturating_add(1))
            .unwrap_or(1);
        let from_len = u32::try_from(self.items.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1);
        self.next_item_number = self.next_item_number.max(from_ids).max(from_len);
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// True iff at least one item covers the cell at `(col, row)`.
pub fn is_occupied(config: &GridConfiguration, col: i32, row: i32) -> bool {
    config.items.iter().any(|item| item.covers(col, row))
}

/// Look an item up by id. `None` marks a stale reference.
pub fn find_item<'a>(config: &'a GridConfiguration, id: &str) -> Option<&'a GridItem> {
    config.items.iter().find(|item| item.id == id)
}

/// In-bounds cells no item covers, row-major.
pub fn free_cells(config: &GridConfiguration) -> Vec<(i32, i32)> {
    let cols = i32::try_from(config.columns).unwrap_or(i32::MAX);
    let rows = i32::try_from(config.rows).unwrap_or(i32::MAX);
    (1..=rows)
        .flat_map(|row| (1..=cols).map(move |col| (col, row)))
        .filter(|&(col, row)| !is_occupied(config, col, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlapping() -> GridConfiguration {
        GridConfiguration {
            items: vec![
                GridItem::new("a", "a", (1, 1), (3, 3)),
                GridItem::new("b", "", (2, 2), (4, 3)),
            ],
            ..GridConfiguration::default()
        }
    }

    #[test]
    fn occupancy_uses_half_open_spans() {
        let config = overlapping();
        assert!(is_occupied(&config, 1, 1));
        assert!(is_occupied(&config, 2, 2));
        assert!(is_occupied(&config, 3, 2));
        assert!(!is_occupied(&config, 4, 2));
        assert!(!is_occupied(&config, 1, 3));
    }

    #[test]
    fn find_item_reports_stale_ids_as_none() {
        let config = overlapping();
        assert_eq!(find_item(&config, "b").map(|i| i.width()), Some(2));
        assert!(find_item(&config, "missing").is_none());
    }

    #[test]
    fn empty_name_falls_back_to_id() {
        let config = overlapping();
        assert_eq!(config.items[1].display_name(), "b");
        assert_eq!(config.items[0].display_name(), "a");
    }

    #[test]
    fn background_resolves_at_read_time() {
        let plain = GridItem::cell("x", "x", 1, 1);
        assert_eq!(plain.resolved_background(), DEFAULT_BACKGROUND);
        assert!(plain.background_color.is_none());

        let tinted = plain.with_background("#112233");
        assert_eq!(tinted.resolved_background(), "#112233");
    }

    #[test]
    fn span_label_shows_inclusive_end() {
        let item = GridItem::new("header", "header", (1, 1), (4, 2));
        assert_eq!(item.span_label(), "header: (1,1) to (3,1)");
    }

    #[test]
    fn free_cells_skip_covered_cells() {
        let config = GridConfiguration::default();
        let free = free_cells(&config);
        assert_eq!(free.len(), 24);
        assert_eq!(free[0], (2, 1));
    }

    #[test]
    fn counter_reconciles_with_existing_ids() {
        let mut config = GridConfiguration {
            items: vec![
                GridItem::cell("item-7", "", 1, 1),
                GridItem::cell("header", "header", 2, 1),
            ],
            next_item_number: 0,
            ..GridConfiguration::default()
        };
        config.reconcile_item_counter();
        assert_eq!(config.next_item_number, 8);
    }

    #[test]
    fn configuration_uses_camel_case_fields() {
        let json = serde_json::to_value(GridConfiguration::default()).unwrap();
        assert_eq!(json["gapUnit"], "px");
        assert_eq!(json["columnUnit"], "fr");
        assert_eq!(json["items"][0]["startCol"], 1);
        assert_eq!(json["justifyContent"], "start");
        assert!(json["items"][0].get("backgroundColor").is_none());
    }
}
