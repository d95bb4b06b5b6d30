//! Pointer-motion quantization for drag and resize gestures.

use crate::geometry::{Point, Size};

/// Convert pointer movement along one axis into whole grid cells.
///
/// Only fully crossed cells count, so motion shorter than a cell yields 0 and
/// keeps accumulating against the caller's reference point. The result never
/// exceeds the axis extent in either direction. Non-positive or non-finite cell
/// sizes yield 0.
pub fn drag_delta(pointer_delta_px: f64, cell_size_px: f64, axis_extent_cells: u32) -> i32 {
    if !pointer_delta_px.is_finite() || !cell_size_px.is_finite() || cell_size_px <= 0.0 {
        return 0;
    }
    let extent = f64::from(axis_extent_cells);
    let cells = (pointer_delta_px / cell_size_px).trunc().clamp(-extent, extent);
    cells as i32
}

/// Tracks the reference point of an in-flight gesture.
///
/// The reference point advances by exactly the cells each sample reports, so
/// the sub-cell remainder carries into the next sample and the total across a
/// gesture equals the whole cells between its first and last pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTracker {
    origin: Point,
}

impl DragTracker {
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Quantize the motion since the reference point into `(columns, rows)` cells.
    pub fn sample(&mut self, pointer: Point, cell: Size, columns: u32, rows: u32) -> (i32, i32) {
        let (dx, dy) = pointer.offset_from(self.origin);
        let delta = (
            drag_delta(dx, cell.width, columns),
            drag_delta(dy, cell.height, rows),
        );
        self.origin = Point::new(
            self.origin.x + f64::from(delta.0) * cell.width,
            self.origin.y + f64::from(delta.1) * cell.height,
        );
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_cell_motion_is_zero() {
        assert_eq!(drag_delta(40.0, 50.0, 5), 0);
        assert_eq!(drag_delta(-49.9, 50.0, 5), 0);
    }

    #[test]
    fn whole_cells_are_counted_in_both_directions() {
        assert_eq!(drag_delta(60.0, 50.0, 5), 1);
        assert_eq!(drag_delta(100.0, 50.0, 5), 2);
        assert_eq!(drag_delta(-120.0, 50.0, 5), -2);
    }

    #[test]
    fn delta_is_bounded_by_axis_extent() {
        assert_eq!(drag_delta(10_000.0, 50.0, 4), 4);
        assert_eq!(drag_delta(-10_000.0, 50.0, 4), -4);
    }

    #[test]
    fn degenerate_cell_size_yields_zero() {
        assert_eq!(drag_delta(80.0, 0.0, 5), 0);
        assert_eq!(drag_delta(80.0, -10.0, 5), 0);
        assert_eq!(drag_delta(f64::NAN, 50.0, 5), 0);
        assert_eq!(drag_delta(80.0, f64::INFINITY, 5), 0);
    }

    #[test]
    fn tracker_accumulates_then_rebases() {
        let cell = Size::new(50.0, 50.0);
        let mut tracker = DragTracker::new(Point::new(0.0, 0.0));

        assert_eq!(tracker.sample(Point::new(40.0, 0.0), cell, 5, 5), (0, 0));
        assert_eq!(tracker.origin(), Point::new(0.0, 0.0));

        assert_eq!(tracker.sample(Point::new(60.0, 0.0), cell, 5, 5), (1, 0));
        assert_eq!(tracker.origin(), Point::new(50.0, 0.0));

        assert_eq!(tracker.sample(Point::new(60.0, 0.0), cell, 5, 5), (0, 0));
        assert_eq!(tracker.sample(Point::new(100.0, 0.0), cell, 5, 5), (1, 0));
    }

    #[test]
    fn small_steps_add_up_to_whole_cells() {
        let cell = Size::new(50.0, 50.0);
        let mut tracker = DragTracker::new(Point::default());
        let total: i32 = (1..=20)
            .map(|step| tracker.sample(Point::new(f64::from(step) * 10.0, 0.0), cell, 10, 10).0)
            .sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn remainders_carry_across_uneven_steps() {
        let cell = Size::new(45.0, 45.0);
        let mut tracker = DragTracker::new(Point::default());
        let total: i32 = (1..=45)
            .map(|step| tracker.sample(Point::new(f64::from(step) * 10.0, 0.0), cell, 20, 20).0)
            .sum();
        assert_eq!(total, 10);

        let back: i32 = (1..=7)
            .map(|step| {
                let pointer = Point::new(450.0 - f64::from(step) * 13.0, 0.0);
                tracker.sample(pointer, cell, 20, 20).0
            })
            .sum();
        assert_eq!(back, -2);
    }

    #[test]
    fn clamped_delta_keeps_unused_motion() {
        let cell = Size::new(50.0, 50.0);
        let mut tracker = DragTracker::new(Point::default());
        assert_eq!(tracker.sample(Point::new(400.0, 0.0), cell, 5, 5), (5, 0));
        assert_eq!(tracker.origin(), Point::new(250.0, 0.0));
    }
}
