use serde::{Deserialize, Serialize};

use crate::core::geo::{Bounds, Point};

/// A decorative cloud drifting across the map above every layer.
///
/// Clouds are inert: they are never hit-tested and never hovered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudRecord {
    pub id: u32,
    pub src: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Alpha in `[0, 1]`
    pub opacity: f32,
    /// Seconds for one full pass across the map
    pub duration: f64,
}

impl CloudRecord {
    /// Horizontal travel of one loop: the map width plus the cloud itself,
    /// so it leaves one edge completely before re-entering at the other.
    pub fn span(&self, map_width: f64) -> f64 {
        map_width + self.width
    }

    /// Top-left corner after `elapsed_secs` of drift.
    ///
    /// x moves right at `span / duration` pixels per second and wraps into
    /// `[-width, map_width)`. A non-positive duration keeps the cloud still.
    pub fn position_at(&self, elapsed_secs: f64, map_width: f64) -> Point {
        let span = self.span(map_width);
        if self.duration <= 0.0 || span <= 0.0 {
            return Point::new(self.x, self.y);
        }

        let travelled = (elapsed_secs.max(0.0) / self.duration).fract() * span;
        let x = (self.x + self.width + travelled).rem_euclid(span) - self.width;
        Point::new(x, self.y)
    }

    pub fn bounds_at(&self, elapsed_secs: f64, map_width: f64) -> Bounds {
        let origin = self.position_at(elapsed_secs, map_width);
        Bounds::from_origin_size(origin.x, origin.y, self.width, self.height)
    }
}
