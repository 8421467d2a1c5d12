//! Pixel-space geometric primitives
//!
//! All values are immutable; every operation returns a new value. Rectangles
//! are axis-aligned with the origin at the top-left of the canvas.

/// A point in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position, growing downward
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Size {
    /// Create a size
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its origin and size
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its four edges
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Create a rectangle at `origin` with the given size
    pub const fn from_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Left edge
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Width and height
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check for zero or negative area
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Top-left corner
    pub const fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Top-right corner
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.y)
    }

    /// Bottom-left corner
    pub fn bottom_left(&self) -> Point {
        Point::new(self.x, self.bottom())
    }

    /// Bottom-right corner
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Midpoint of the top edge
    pub fn top_mid(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y)
    }

    /// Midpoint of the bottom edge
    pub fn bottom_mid(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.bottom())
    }

    /// Midpoint of the left edge
    pub fn mid_left(&self) -> Point {
        Point::new(self.x, self.y + self.height / 2.0)
    }

    /// Midpoint of the right edge
    pub fn mid_right(&self) -> Point {
        Point::new(self.right(), self.y + self.height / 2.0)
    }

    /// Centre point
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check whether a point lies inside or on the boundary
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Check whether another rectangle lies entirely inside this one
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.contains(other.top_left()) && self.contains(other.bottom_right())
    }

    /// Check whether the interiors overlap; touching edges do not count
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Self) -> Self {
        Self::from_edges(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Overlapping area, `None` when the interiors do not overlap
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        self.overlaps(other).then(|| {
            Self::from_edges(
                self.left().max(other.left()),
                self.top().max(other.top()),
                self.right().min(other.right()),
                self.bottom().min(other.bottom()),
            )
        })
    }

    /// Remove `cutter` from this rectangle by trimming whole edges
    ///
    /// Returns the rectangle unchanged when nothing overlaps and `None` when
    /// the cutter covers it completely. Otherwise an edge is pulled in to the
    /// cutter's far side only if the cutter contains both of that edge's
    /// corners and its midpoint. Overlaps that do not span a full edge, such
    /// as a cutter poking into the middle, leave the rectangle as it was.
    pub fn subtract(&self, cutter: &Self) -> Option<Self> {
        if !self.overlaps(cutter) {
            return Some(*self);
        }
        if cutter.contains_rect(self) {
            return None;
        }

        let covers = |points: [Point; 3]| points.iter().all(|&point| cutter.contains(point));

        let mut left = self.left();
        let mut top = self.top();
        let mut right = self.right();
        let mut bottom = self.bottom();

        if covers([self.top_left(), self.mid_left(), self.bottom_left()]) {
            left = cutter.right();
        }
        if covers([self.top_right(), self.mid_right(), self.bottom_right()]) {
            right = cutter.left();
        }
        if covers([self.top_left(), self.top_mid(), self.top_right()]) {
            top = cutter.bottom();
        }
        if covers([self.bottom_left(), self.bottom_mid(), self.bottom_right()]) {
            bottom = cutter.top();
        }

        let trimmed = Self::from_edges(left, top, right, bottom);
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
