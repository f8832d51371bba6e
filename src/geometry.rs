//! Points, field bounds and the mapping between screen points and samples.
//!
//! Bounds are half-open: a rectangle at `x` with width `w` covers
//! `[x, x + w)`. Clamping pulls a point on or beyond the high edge back to
//! `edge - 1`, one unit inside.

/// A 2D point in surface (client pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: f64,
    /// Y coordinate of the top-left corner.
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of a `width` x `height` surface placed at `origin`.
    #[must_use]
    pub fn at(origin: Point, width: u32, height: u32) -> Self {
        Self::new(origin.x, origin.y, f64::from(width), f64::from(height))
    }

    /// Left edge (inclusive).
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Right edge (exclusive).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge (inclusive).
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Check if a point lies inside the half-open rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.contains_x(point.x) && self.contains_y(point.y)
    }

    fn contains_x(&self, x: f64) -> bool {
        x >= self.left() && x < self.right()
    }

    fn contains_y(&self, y: f64) -> bool {
        y >= self.top() && y < self.bottom()
    }
}

/// Nearest point of `bounds` to `point`, each axis clamped independently.
///
/// A coordinate `>= right` becomes `right - 1`, one `< left` becomes `left`;
/// the same holds for y against `top`/`bottom`. Inside points are returned
/// unchanged.
///
/// # Example
///
/// ```
/// use trueno_picker::geometry::{clamp_to_field, Point, Rect};
///
/// let bounds = Rect::new(10.0, 10.0, 100.0, 50.0);
/// assert_eq!(clamp_to_field(Point::new(500.0, 0.0), bounds), Point::new(109.0, 10.0));
/// ```
#[must_use]
pub fn clamp_to_field(point: Point, bounds: Rect) -> Point {
    let mut clamped = point;
    if !bounds.contains_x(point.x) {
        if point.x >= bounds.right() {
            clamped.x = bounds.right() - 1.0;
        } else if point.x < bounds.left() {
            clamped.x = bounds.left();
        }
    }
    if !bounds.contains_y(point.y) {
        if point.y >= bounds.bottom() {
            clamped.y = bounds.bottom() - 1.0;
        } else if point.y < bounds.top() {
            clamped.y = bounds.top();
        }
    }
    clamped
}

/// Field-local `(col, row)` of an absolute point, rounded to the nearest sample.
///
/// Points left of or above the origin saturate to column/row zero.
#[must_use]
pub fn point_to_index(point: Point, bounds: Rect) -> (u32, u32) {
    let col = crate::color::convert::round_half_up(point.x - bounds.left());
    let row = crate::color::convert::round_half_up(point.y - bounds.top());
    (col as u32, row as u32)
}

/// Absolute point of a field-local `(col, row)`.
#[must_use]
pub fn index_to_point((col, row): (u32, u32), bounds: Rect) -> Point {
    Point::new(bounds.left() + f64::from(col), bounds.top() + f64::from(row))
}
