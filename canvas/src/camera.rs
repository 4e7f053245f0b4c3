#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{FIT_ZOOM_MIN, INTERACTIVE_ZOOM_MIN, ZOOM_MAX};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by its min and max corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[must_use]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Rectangle with top-left `origin` and the given size.
    #[must_use]
    pub fn from_origin_size(origin: Point, width: f64, height: f64) -> Self {
        Self { min: origin, max: Point::new(origin.x + width, origin.y + height) }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5)
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.min.x && pt.x <= self.max.x && pt.y >= self.min.y && pt.y <= self.max.y
    }

    /// Smallest rectangle covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: Rect) -> Rect {
        Rect {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

/// Screen axis selector for single-axis panning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Inclusive zoom range used to clamp a zoom value before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl ZoomLimits {
    /// Limits for wheel zoom and the zoom buttons.
    pub const INTERACTIVE: Self = Self { min: INTERACTIVE_ZOOM_MIN, max: ZOOM_MAX };

    /// Limits for fit-to-screen.
    pub const FIT: Self = Self { min: FIT_ZOOM_MIN, max: ZOOM_MAX };

    #[must_use]
    pub fn clamp(self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(self, zoom: f64) -> bool {
        (self.min..=self.max).contains(&zoom)
    }
}

/// Camera state for pan/zoom on the infinite canvas.
///
/// `pan_x` / `pan_y` are the screen-space position of the world origin, in
/// pixels; they are not a world-space camera position. `zoom` is a scale
/// factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Translate the world origin by a screen-space delta. The world is unbounded.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Translate along a single screen axis.
    pub fn pan_axis(&mut self, axis: Axis, delta: f64) {
        match axis {
            Axis::Horizontal => self.pan_by(delta, 0.0),
            Axis::Vertical => self.pan_by(0.0, delta),
        }
    }

    /// Change zoom by `delta` while keeping the world point under `anchor` fixed on screen.
    ///
    /// Returns `false` when the clamped zoom equals the current zoom.
    pub fn zoom_at(&mut self, anchor: Point, delta: f64, limits: ZoomLimits) -> bool {
        self.zoom_to(anchor, self.zoom + delta, limits)
    }

    /// Set zoom to `zoom` (clamped) while keeping the world point under `anchor` fixed on screen.
    ///
    /// Returns `false` when the clamped zoom equals the current zoom.
    #[allow(clippy::float_cmp)]
    pub fn zoom_to(&mut self, anchor: Point, zoom: f64, limits: ZoomLimits) -> bool {
        if !zoom.is_finite() {
            return false;
        }
        let new_zoom = limits.clamp(zoom);
        if new_zoom == self.zoom {
            return false;
        }

        let world = self.screen_to_world(anchor);
        self.pan_x = anchor.x - world.x * new_zoom;
        self.pan_y = anchor.y - world.y * new_zoom;
        self.zoom = new_zoom;
        true
    }

    /// Pan so that `world` lands on `screen` at the current zoom.
    pub fn center_on(&mut self, world: Point, screen: Point) {
        self.pan_x = screen.x - world.x * self.zoom;
        self.pan_y = screen.y - world.y * self.zoom;
    }
}
