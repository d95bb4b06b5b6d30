//! Pixel-space geometry reported by the rendering collaborator.

/// Pointer position in on-screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_from(&self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Width and height in on-screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size of one grid cell when `self` is the whole grid surface.
    ///
    /// Zero track counts produce a zero-sized cell, which quantizes to no motion.
    pub fn cell_of(&self, columns: u32, rows: u32) -> Size {
        let per = |extent: f64, count: u32| {
            if count == 0 {
                0.0
            } else {
                extent / f64::from(count)
            }
        };
        Size::new(per(self.width, columns), per(self.height, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_size_divides_surface_by_tracks() {
        let cell = Size::new(500.0, 400.0).cell_of(5, 4);
        assert_eq!(cell, Size::new(100.0, 100.0));
    }

    #[test]
    fn zero_tracks_yield_zero_cell() {
        assert_eq!(Size::new(500.0, 400.0).cell_of(0, 0), Size::default());
    }
}
