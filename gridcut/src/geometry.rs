use serde::{Deserialize, Serialize};

/// A rectangle in sheet pixel space, with the origin at the bottom-left corner
/// of the sheet and Y pointing up.
///
/// Positions are signed because cells produced with
/// [`PartialCells::Overhang`](enum.PartialCells.html) may start below the
/// bottom edge of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn max(&self) -> (i64, i64) {
        (
            self.x + i64::from(self.width),
            self.y + i64::from(self.height),
        )
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        let (self_max_x, self_max_y) = self.max();
        let (other_max_x, other_max_y) = other.max();

        self.x < other_max_x && other.x < self_max_x && self.y < other_max_y && other.y < self_max_y
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn max_corner() {
        let rect = Rect::new(8, -6, 8, 8);
        assert_eq!(rect.max(), (16, 2));
    }

    #[test]
    fn adjacent_cells_do_not_intersect() {
        let left = Rect::new(0, 0, 8, 8);
        let right = Rect::new(8, 0, 8, 8);
        let above = Rect::new(0, 8, 8, 8);

        assert!(!left.intersects(&right));
        assert!(!left.intersects(&above));
    }

    #[test]
    fn overlapping_cells_intersect() {
        let a = Rect::new(0, 0, 8, 8);
        let b = Rect::new(4, 4, 8, 8);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }
}
