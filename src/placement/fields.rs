//! Edits arriving from numeric text fields.
//!
//! Field input is forgiving: a leading integer is taken from whatever was
//! typed, and empty, garbage or zero input falls back to the field default.

use crate::model::{GridConfiguration, MAX_START_LINE};

use super::core::update_item;

/// Largest column or row count accepted from an edit.
pub const MAX_TRACKS: u32 = 12;

/// Clamp a requested column or row count into `1..=MAX_TRACKS`.
pub fn track_count_in_range(count: u32) -> u32 {
    count.clamp(1, MAX_TRACKS)
}

/// Leading integer of `input`, or `default` when there is none or it is zero.
pub fn parse_int_or(input: &str, default: i32) -> i32 {
    let trimmed = input.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1_i64, &trimmed[1..]),
        Some(b'+') => (1_i64, &trimmed[1..]),
        _ => (1_i64, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return default;
    }

    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    let value = (sign * magnitude).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    if value == 0 { default } else { value }
}

pub fn set_columns_from_input(config: &GridConfiguration, input: &str) -> GridConfiguration {
    GridConfiguration {
        columns: positive_count(input),
        ..config.clone()
    }
}

pub fn set_rows_from_input(config: &GridConfiguration, input: &str) -> GridConfiguration {
    GridConfiguration {
        rows: positive_count(input),
        ..config.clone()
    }
}

/// Gap defaults to 0 and never goes negative.
pub fn set_gap_from_input(config: &GridConfiguration, input: &str) -> GridConfiguration {
    GridConfiguration {
        gap: f64::from(parse_int_or(input, 0).max(0)),
        ..config.clone()
    }
}

fn positive_count(input: &str) -> u32 {
    track_count_in_range(u32::try_from(parse_int_or(input, 1)).unwrap_or(1))
}

/// Set an item's start lines directly, pushing each end to at least one cell past it.
pub fn set_item_start(
    config: &GridConfiguration,
    id: &str,
    start_col: i32,
    start_row: i32,
) -> GridConfiguration {
    let (start_col, start_row) = (start_col.min(MAX_START_LINE), start_row.min(MAX_START_LINE));
    update_item(config, id, |item| {
        item.start_col = start_col;
        item.start_row = start_row;
        item.end_col = item.end_col.max(start_col.saturating_add(1));
        item.end_row = item.end_row.max(start_row.saturating_add(1));
    })
}

/// Set an item's end lines when both stay after the start; otherwise leave it alone.
pub fn set_item_end(
    config: &GridConfiguration,
    id: &str,
    end_col: i32,
    end_row: i32,
) -> GridConfiguration {
    update_item(config, id, |item| {
        if end_col > item.start_col && end_row > item.start_row {
            item.end_col = end_col;
            item.end_row = end_row;
        }
    })
}
