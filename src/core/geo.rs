use serde::{Deserialize, Serialize};

/// Represents a point in map pixel or screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply(&self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents an axis-aligned box in map pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Creates new bounds from two points
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates bounds from an origin and a size, the way layer records are written
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Point::new(x + width, y + height))
    }

    /// Creates bounds from a center point and size
    pub fn from_center_and_size(center: Point, width: f64, height: f64) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        Self::new(
            Point::new(center.x - half_width, center.y - half_height),
            Point::new(center.x + half_width, center.y + half_height),
        )
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Checks if the bounds contain a point (edges inclusive)
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Uniformly scales the box around its own center
    pub fn scaled_about_center(&self, factor: f64) -> Self {
        Self::from_center_and_size(self.center(), self.width() * factor, self.height() * factor)
    }
}

/// Uniform scale plus offset that fits the native map canvas inside a
/// viewport, preserving aspect ratio and centring the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub scale: f64,
    pub offset: Point,
}

impl FitTransform {
    /// Fit a `content` sized canvas into `viewport` (origin + size).
    pub fn contain(content: Point, viewport: Bounds) -> Self {
        if content.x <= 0.0 || content.y <= 0.0 {
            return Self {
                scale: 1.0,
                offset: viewport.min,
            };
        }

        let scale = (viewport.width() / content.x)
            .min(viewport.height() / content.y)
            .max(0.0);
        let used = content.multiply(scale);
        let offset = Point::new(
            viewport.min.x + (viewport.width() - used.x) / 2.0,
            viewport.min.y + (viewport.height() - used.y) / 2.0,
        );

        Self { scale, offset }
    }

    pub fn map_to_screen(&self, point: Point) -> Point {
        point.multiply(self.scale).add(&self.offset)
    }

    pub fn bounds_to_screen(&self, bounds: &Bounds) -> Bounds {
        Bounds::new(self.map_to_screen(bounds.min), self.map_to_screen(bounds.max))
    }

    /// Inverse of [`FitTransform::map_to_screen`]. `None` for a degenerate viewport.
    pub fn screen_to_map(&self, point: Point) -> Option<Point> {
        if self.scale <= f64::EPSILON {
            return None;
        }
        Some(point.subtract(&self.offset).multiply(1.0 / self.scale))
    }
}
