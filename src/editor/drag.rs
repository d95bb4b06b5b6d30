use crate::geometry::{Point, Size};
use crate::model::{GridConfiguration, GridItem, ItemId};
use crate::placement::{DragTracker, clamp_move, clamp_resize};

/// What a pointer gesture does to its item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Drag the whole item; its span is preserved.
    Move,
    /// Drag the bottom-right handle; the origin is preserved.
    Resize,
}

/// In-flight gesture on one item.
#[derive(Debug, Clone)]
pub(crate) struct DragSession {
    pub(crate) item_id: ItemId,
    pub(crate) mode: DragMode,
    tracker: DragTracker,
}

/// Clamped coordinates a gesture step wants to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DragStep {
    MoveTo(i32, i32),
    ResizeTo(i32, i32),
}

impl DragSession {
    pub(crate) fn new(item_id: ItemId, mode: DragMode, origin: Point) -> Self {
        Self {
            item_id,
            mode,
            tracker: DragTracker::new(origin),
        }
    }

    /// Quantize the pointer sample and clamp the result onto the grid.
    ///
    /// `None` when the motion is still sub-cell or the clamped target equals
    /// the item's current geometry.
    pub(crate) fn step(
        &mut self,
        item: &GridItem,
        config: &GridConfiguration,
        pointer: Point,
        surface: Size,
    ) -> Option<DragStep> {
        let (columns, rows) = (config.columns, config.rows);
        let cell = surface.cell_of(columns, rows);
        let (dc, dr) = self.tracker.sample(pointer, cell, columns, rows);
        if (dc, dr) == (0, 0) {
            return None;
        }

        match self.mode {
            DragMode::Move => {
                let target = clamp_move(
                    item,
                    item.start_col.saturating_add(dc),
                    item.start_row.saturating_add(dr),
                    columns,
                    rows,
                );
                (target != (item.start_col, item.start_row))
                    .then_some(DragStep::MoveTo(target.0, target.1))
            }
            DragMode::Resize => {
                let target = clamp_resize(
                    item,
                    item.end_col.saturating_add(dc),
                    item.end_row.saturating_add(dr),
                    columns,
                    rows,
                );
                (target != (item.end_col, item.end_row))
                    .then_some(DragStep::ResizeTo(target.0, target.1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_step_is_clamped() {
        let config = GridConfiguration::default();
        let item = config.items[0].clone();
        let mut session = DragSession::new(item.id.clone(), DragMode::Move, Point::default());
        let surface = Size::new(500.0, 500.0);

        assert_eq!(session.step(&item, &config, Point::new(50.0, 0.0), surface), None);
        assert_eq!(
            session.step(&item, &config, Point::new(250.0, 0.0), surface),
            Some(DragStep::MoveTo(3, 1))
        );

        let mut session = DragSession::new(item.id.clone(), DragMode::Move, Point::default());
        assert_eq!(
            session.step(&item, &config, Point::new(-300.0, 0.0), surface),
            None
        );
    }

    #[test]
    fn resize_step_never_collapses() {
        let config = GridConfiguration::default();
        let item = GridItem::new("a", "a", (2, 2), (4, 4));
        let mut session = DragSession::new("a".into(), DragMode::Resize, Point::default());
        let surface = Size::new(500.0, 500.0);
        assert_eq!(
            session.step(&item, &config, Point::new(-400.0, -400.0), surface),
            Some(DragStep::ResizeTo(3, 3))
        );
    }
}
