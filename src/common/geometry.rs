//! Shape geometry in EMU.
use super::unit::inches_to_emu;

/// A point on the slide canvas, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Position and size of a shape, in EMU.
///
/// No bounds are enforced: negative offsets and rectangles that extend past
/// the slide canvas are written as given.
///
/// # Examples
///
/// ```rust
/// use deckhand::Rect;
///
/// let r = Rect::inches(0.5, 0.3, 15.0, 0.6);
/// assert_eq!(r.left, 457_200);
/// assert_eq!(r.bottom_center().y, r.top + r.height);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    #[inline]
    pub const fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a rectangle from inch measurements.
    #[inline]
    pub fn inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(
            inches_to_emu(left),
            inches_to_emu(top),
            inches_to_emu(width),
            inches_to_emu(height),
        )
    }

    /// Midpoint of the bottom edge (connector begin anchor).
    ///
    /// The half-width is floored, so odd widths round towards the left edge.
    #[inline]
    pub fn bottom_center(&self) -> Point {
        Point::new(self.left + self.width.div_euclid(2), self.top + self.height)
    }

    /// Midpoint of the top edge (connector end anchor).
    #[inline]
    pub fn top_center(&self) -> Point {
        Point::new(self.left + self.width.div_euclid(2), self.top)
    }

    /// Smallest rectangle containing both points.
    pub fn spanning(a: Point, b: Point) -> Self {
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
        )
    }
}
