//! Viewport: the camera plus the size of the surface it projects onto.
//!
//! [`Camera`] holds the pure transform math. The viewport adds what needs the
//! surface size or board policy: zoom about the surface center, reset,
//! fit-to-content, focusing a world point, and the derived grid size.
//!
//! Zoom is clamped before every store, so the camera held here never has a
//! zoom outside the configured limits and never reaches zero.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::Serialize;

use crate::camera::{Axis, Camera, Point, Rect, ZoomLimits};
use crate::config::BoardConfig;
use crate::consts::MIN_FIT_EXTENT;
use crate::doc::EntityStore;
use crate::snap::GridPolicy;

/// On-screen layout of the background dot grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridPattern {
    /// Distance between grid dots in screen pixels.
    pub spacing_px: f64,
    /// Screen position of a grid dot (the world origin).
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Debug, Clone)]
pub struct Viewport {
    camera: Camera,
    width: f64,
    height: f64,
    interactive: ZoomLimits,
    fit: ZoomLimits,
    outer: ZoomLimits,
    grid: GridPolicy,
    zoom_step: f64,
}

impl Viewport {
    /// Identity camera on a zero-sized surface.
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            camera: Camera::default(),
            width: 0.0,
            height: 0.0,
            interactive: config.interactive_zoom,
            fit: config.fit_zoom,
            outer: config.outer_zoom(),
            grid: config.grid,
            zoom_step: config.zoom_step,
        }
    }

    // --- State ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Replace the camera, clamping zoom into the widest configured range.
    pub fn set_camera(&mut self, camera: Camera) {
        let zoom = if camera.zoom.is_finite() { self.outer.clamp(camera.zoom) } else { self.camera.zoom };
        self.camera = Camera { pan_x: camera.pan_x, pan_y: camera.pan_y, zoom };
    }

    /// Surface size in screen pixels.
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Update the surface size. Negative or non-finite sizes collapse to zero.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = sanitize_extent(width);
        self.height = sanitize_extent(height);
    }

    // --- Transforms ---

    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        self.camera.world_to_screen(world)
    }

    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        self.camera.screen_to_world(screen)
    }

    /// Center of the surface in screen pixels.
    #[must_use]
    pub fn center_screen(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// World point currently under the surface center.
    #[must_use]
    pub fn center_world(&self) -> Point {
        self.screen_to_world(self.center_screen())
    }

    /// World-space rectangle currently visible on the surface.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        Rect::new(
            self.screen_to_world(Point::new(0.0, 0.0)),
            self.screen_to_world(Point::new(self.width, self.height)),
        )
    }

    // --- Grid ---

    /// Snapping quantum for the current zoom.
    #[must_use]
    pub fn grid_size(&self) -> f64 {
        self.grid.size_at(self.camera.zoom)
    }

    #[must_use]
    pub fn grid_pattern(&self) -> GridPattern {
        GridPattern {
            spacing_px: self.grid_size() * self.camera.zoom,
            offset_x: self.camera.pan_x,
            offset_y: self.camera.pan_y,
        }
    }

    // --- Pan ---

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.camera.pan_by(dx, dy);
    }

    pub fn pan_axis(&mut self, axis: Axis, delta: f64) {
        self.camera.pan_axis(axis, delta);
    }

    /// Pan so `world` sits at the surface center, keeping zoom.
    pub fn focus_on(&mut self, world: Point) {
        let center = self.center_screen();
        self.camera.center_on(world, center);
    }

    // --- Zoom ---

    /// Zoom by `delta` about a screen anchor using the interactive limits.
    pub fn zoom_at(&mut self, anchor: Point, delta: f64) -> bool {
        self.camera.zoom_at(anchor, delta, self.interactive)
    }

    /// Step zoom in about the surface center.
    pub fn zoom_in(&mut self) -> bool {
        let center = self.center_screen();
        self.camera.zoom_at(center, self.zoom_step, self.interactive)
    }

    /// Step zoom out about the surface center.
    pub fn zoom_out(&mut self) -> bool {
        let center = self.center_screen();
        self.camera.zoom_at(center, -self.zoom_step, self.interactive)
    }

    /// Return to zoom 1.0 about the surface center. No-op when already there.
    pub fn reset(&mut self) -> bool {
        let center = self.center_screen();
        self.camera.zoom_to(center, 1.0, self.outer)
    }

    // --- Fit ---

    /// Fit every box (with its extent) inside the surface minus `padding`.
    ///
    /// Returns `false` and leaves the camera alone when the store is empty.
    pub fn fit_to_content(&mut self, doc: &EntityStore, box_size: f64, padding: f64) -> bool {
        let Some(bounds) = doc.bounds(box_size) else {
            return false;
        };
        self.fit_rect(bounds, padding);
        true
    }

    /// Zoom (with the fit limits) and pan so `rect` is centered and fits inside the padded surface.
    pub fn fit_rect(&mut self, rect: Rect, padding: f64) {
        let w = rect.width().max(MIN_FIT_EXTENT);
        let h = rect.height().max(MIN_FIT_EXTENT);
        let scale_x = (self.width - padding) / w;
        let scale_y = (self.height - padding) / h;
        let zoom = self.fit.clamp(scale_x.min(scale_y));

        self.camera.zoom = zoom;
        self.camera.center_on(rect.center(), self.center_screen());
    }
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
