use crate::model::{GridConfiguration, GridItem};

/// Append a single-cell item at `(col, row)`.
///
/// The id and name come from the configuration's counter, so an id freed by a
/// deletion is never minted again. No collision check is made.
pub fn add_item(config: &GridConfiguration, col: i32, row: i32) -> (GridConfiguration, GridItem) {
    let number = config.next_item_number.max(1);
    let item = GridItem::cell(format!("item-{number}"), format!("item{number}"), col, row);

    let mut next = config.clone();
    next.items.push(item.clone());
    next.next_item_number = number.saturating_add(1);
    (next, item)
}

/// Move an item's origin, keeping its width and height.
pub fn move_item(
    config: &GridConfiguration,
    id: &str,
    start_col: i32,
    start_row: i32,
) -> GridConfiguration {
    update_item(config, id, |item| {
        let (width, height) = (item.width(), item.height());
        item.start_col = start_col;
        item.start_row = start_row;
        item.end_col = start_col.saturating_add(width);
        item.end_row = start_row.saturating_add(height);
    })
}

/// Set an item's end lines, leaving the origin fixed.
///
/// Callers keep `end > start`; see [`clamp_resize`].
pub fn resize_item(
    config: &GridConfiguration,
    id: &str,
    end_col: i32,
    end_row: i32,
) -> GridConfiguration {
    update_item(config, id, |item| {
        item.end_col = end_col;
        item.end_row = end_row;
    })
}

pub fn delete_item(config: &GridConfiguration, id: &str) -> GridConfiguration {
    let mut next = config.clone();
    next.items.retain(|item| item.id != id);
    next
}

pub fn rename_item(config: &GridConfiguration, id: &str, name: &str) -> GridConfiguration {
    update_item(config, id, |item| item.name = name.to_string())
}

pub fn recolor_item(config: &GridConfiguration, id: &str, color: &str) -> GridConfiguration {
    update_item(config, id, |item| item.background_color = Some(color.to_string()))
}

/// Clamp a proposed origin so the whole span stays on a `max_cols x max_rows` grid.
///
/// An item wider than the grid pins to line 1.
pub fn clamp_move(
    item: &GridItem,
    start_col: i32,
    start_row: i32,
    max_cols: u32,
    max_rows: u32,
) -> (i32, i32) {
    let last_col = track_count(max_cols).saturating_sub(item.width()).saturating_add(1);
    let last_row = track_count(max_rows).saturating_sub(item.height()).saturating_add(1);
    (start_col.min(last_col).max(1), start_row.min(last_row).max(1))
}

/// Clamp proposed end lines to at least one cell and at most one line past the last track.
pub fn clamp_resize(
    item: &GridItem,
    end_col: i32,
    end_row: i32,
    max_cols: u32,
    max_rows: u32,
) -> (i32, i32) {
    let col = end_col
        .min(track_count(max_cols) + 1)
        .max(item.start_col.saturating_add(1));
    let row = end_row
        .min(track_count(max_rows) + 1)
        .max(item.start_row.saturating_add(1));
    (col, row)
}

fn track_count(count: u32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX).min(i32::MAX - 1)
}

pub(crate) fn update_item(
    config: &GridConfiguration,
    id: &str,
    apply: impl FnOnce(&mut GridItem),
) -> GridConfiguration {
    let mut next = config.clone();
    if let Some(index) = next.position_of(id) {
        apply(&mut next.items[index]);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::find_item;

    #[test]
    fn add_item_mints_next_number() {
        let config = GridConfiguration::default();
        let (next, item) = add_item(&config, 3, 2);
        assert_eq!(item.id, "item-2");
        assert_eq!(item.name, "item2");
        assert_eq!((item.start_col, item.end_col), (3, 4));
        assert_eq!((item.start_row, item.end_row), (2, 3));
        assert_eq!(next.items.len(), 2);
        assert_eq!(next.items.last(), Some(&item));
        assert_eq!(config.items.len(), 1);
    }

    #[test]
    fn extreme_coordinates_keep_one_cell_spans() {
        let config = GridConfiguration::default();
        let (_, item) = add_item(&config, i32::MAX, i32::MIN);
        assert_eq!((item.start_col, item.end_col), (i32::MAX - 1, i32::MAX));
        assert_eq!((item.start_row, item.end_row), (i32::MIN, i32::MIN + 1));

        let wide = GridItem::new("w", "w", (i32::MIN, 1), (2, 2));
        assert_eq!(wide.width(), i32::MAX);
        assert_eq!(clamp_move(&wide, i32::MIN + 1, 1, 5, 5), (1, 1));

        let config = GridConfiguration {
            items: vec![wide],
            ..GridConfiguration::default()
        };
        let moved = move_item(&config, "w", 3, 1);
        let item = find_item(&moved, "w").unwrap();
        assert_eq!((item.start_col, item.end_col), (3, i32::MAX));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let config = GridConfiguration::default();
        let (config, second) = add_item(&config, 2, 1);
        let config = delete_item(&config, &second.id);
        let (_, third) = add_item(&config, 2, 1);
        assert_eq!(third.id, "item-3");
    }

    #[test]
    fn add_item_accepts_occupied_and_out_of_range_cells() {
        let config = GridConfiguration::default();
        let (next, item) = add_item(&config, 1, 1);
        assert_eq!(next.items.len(), 2);
        let (_, far) = add_item(&next, 40, -2);
        assert_eq!((far.start_col, far.start_row), (40, -2));
        assert_eq!(item.width(), 1);
    }

    #[test]
    fn move_preserves_span() {
        let config = GridConfiguration {
            items: vec![GridItem::new("a", "a", (1, 1), (3, 4))],
            ..GridConfiguration::default()
        };
        let moved = move_item(&config, "a", 2, 2);
        let item = find_item(&moved, "a").unwrap();
        assert_eq!(
            (item.start_col, item.start_row, item.end_col, item.end_row),
            (2, 2, 4, 5)
        );
    }

    #[test]
    fn unknown_ids_leave_configuration_unchanged() {
        let config = GridConfiguration::default();
        assert_eq!(move_item(&config, "ghost", 3, 3), config);
        assert_eq!(resize_item(&config, "ghost", 3, 3), config);
        assert_eq!(rename_item(&config, "ghost", "x"), config);
        assert_eq!(recolor_item(&config, "ghost", "#000"), config);
        assert_eq!(delete_item(&config, "ghost"), config);
    }

    #[test]
    fn resize_sets_end_lines_only() {
        let config = GridConfiguration::default();
        let resized = resize_item(&config, "item-1", 4, 3);
        let item = &resized.items[0];
        assert_eq!(
            (item.start_col, item.start_row, item.end_col, item.end_row),
            (1, 1, 4, 3)
        );
    }

    #[test]
    fn rename_and_recolor_touch_one_field() {
        let config = GridConfiguration::default();
        let renamed = rename_item(&config, "item-1", "hero");
        assert_eq!(renamed.items[0].name, "hero");
        let tinted = recolor_item(&renamed, "item-1", "#ff0000");
        assert_eq!(tinted.items[0].background_color.as_deref(), Some("#ff0000"));
        assert_eq!(tinted.items[0].name, "hero");
    }

    #[test]
    fn clamp_move_keeps_span_on_grid() {
        let item = GridItem::new("a", "a", (1, 1), (3, 2));
        assert_eq!(clamp_move(&item, 5, 5, 5, 5), (4, 5));
        assert_eq!(clamp_move(&item, -3, 0, 5, 5), (1, 1));
        assert_eq!(clamp_move(&item, 2, 3, 5, 5), (2, 3));
    }

    #[test]
    fn clamp_move_pins_oversized_items_to_first_line() {
        let item = GridItem::new("wide", "wide", (1, 1), (9, 2));
        assert_eq!(clamp_move(&item, 3, 1, 5, 5), (1, 1));
    }

    #[test]
    fn clamp_resize_bounds() {
        let item = GridItem::new("a", "a", (2, 2), (3, 3));
        assert_eq!(clamp_resize(&item, 1, 0, 5, 5), (3, 3));
        assert_eq!(clamp_resize(&item, 99, 99, 5, 5), (6, 6));
        assert_eq!(clamp_resize(&item, 4, 5, 5, 5), (4, 5));
    }

    #[test]
    fn clamps_are_idempotent() {
        let item = GridItem::new("a", "a", (2, 2), (4, 3));
        let once = clamp_move(&item, 9, -4, 5, 5);
        assert_eq!(clamp_move(&item, once.0, once.1, 5, 5), once);
        let once = clamp_resize(&item, -7, 12, 5, 5);
        assert_eq!(clamp_resize(&item, once.0, once.1, 5, 5), once);
    }
}
