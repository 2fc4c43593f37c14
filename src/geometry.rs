//! Pixel-space geometry shared by the layout engine and the drawing surface.
//!
//! Coordinates are integers with the origin at the top-left corner of the
//! canvas. A [`Rect`] covers the half-open ranges `x..x + width` and
//! `y..y + height`; [`Rect::corners`] converts it to the inclusive
//! `(x1, y1)-(x2, y2)` form that raster drawing works in.

use serde::{Deserialize, Serialize};

/// A rectangle defined in pixel coordinates.
///
/// The position is signed so that outlines drawn at a negative inset (for
/// example a 2px frame around a slot at the canvas edge) can be expressed and
/// then clipped by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X offset from the left edge of the canvas
    pub x: i32,
    /// Y offset from the top edge of the canvas
    pub y: i32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given position and dimensions.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle starting at origin (0, 0) with the given dimensions.
    pub const fn from_size(size: SizePx) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Creates a square cell of `size` pixels at (x, y).
    pub const fn square(x: i32, y: i32, size: u32) -> Self {
        Self::new(x, y, size, size)
    }

    /// Returns the right edge coordinate (x + width), exclusive.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Returns the bottom edge coordinate (y + height), exclusive.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Returns true if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the inclusive corners `(x1, y1, x2, y2)`.
    ///
    /// Only meaningful for non-empty rectangles.
    pub fn corners(&self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.right() - 1, self.bottom() - 1)
    }

    /// Moves every edge inward by `by` pixels.
    ///
    /// A negative value grows the rectangle outward. Shrinking past zero
    /// yields an empty rectangle rather than a negative size.
    pub fn inset(&self, by: i32) -> Self {
        let shrink = |len: u32| (len as i64 - 2 * by as i64).max(0) as u32;
        Self {
            x: self.x + by,
            y: self.y + by,
            width: shrink(self.width),
            height: shrink(self.height),
        }
    }

    /// Returns true if the point lies inside the rectangle.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns true if `other` lies entirely within this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns true if the two rectangles share a region of non-zero area.
    ///
    /// Edge-adjacent rectangles (one's right edge equal to the other's left
    /// edge) do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Returns true if the rectangle lies within a canvas of the given size.
    pub fn fits_within(&self, size: SizePx) -> bool {
        Rect::from_size(size).contains(self)
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A square size.
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl std::fmt::Display for SizePx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_new() {
        let rect = Rect::new(10, 20, 100, 200);
        assert_eq!(rect.x, 10);
        assert_eq!(rect.y, 20);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 220);
        assert_eq!(rect.corners(), (10, 20, 109, 219));
    }

    #[test]
    fn inset_grows_and_shrinks() {
        let slot = Rect::square(80, 18, 18);

        assert_eq!(slot.inset(-2).corners(), (78, 16, 99, 37));
        assert_eq!(slot.inset(-1).corners(), (79, 17, 98, 36));
        assert_eq!(slot.inset(0), slot);
        assert_eq!(slot.inset(1), Rect::new(81, 19, 16, 16));
    }

    #[test]
    fn inset_past_zero_is_empty() {
        let thin = Rect::new(0, 0, 3, 10);
        let shrunk = thin.inset(2);
        assert!(shrunk.is_empty());
        assert_eq!(shrunk.width, 0);
        assert_eq!(shrunk.height, 6);
    }

    #[test]
    fn edge_adjacent_cells_do_not_intersect() {
        let a = Rect::square(8, 45, 18);
        let b = Rect::square(26, 45, 18);
        let below = Rect::square(8, 63, 18);
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&below));
        assert!(a.intersects(&Rect::square(25, 62, 18)));
    }

    #[test]
    fn containment() {
        let panel = Rect::new(6, 50, 164, 50);
        assert!(panel.contains(&Rect::square(12, 56, 18)));
        assert!(panel.contains(&panel));
        assert!(!panel.contains(&Rect::square(160, 56, 18)));
        assert!(Rect::square(158, 0, 18).fits_within(SizePx::new(176, 166)));
        assert!(!Rect::square(159, 0, 18).fits_within(SizePx::new(176, 166)));
        assert!(!Rect::square(-1, 0, 18).fits_within(SizePx::new(176, 166)));
    }

    #[test]
    fn size_px_is_square() {
        assert!(SizePx::square(32).is_square());
        assert!(!SizePx::new(176, 212).is_square());
        assert_eq!(SizePx::new(176, 212).to_string(), "176x212");
    }
}
