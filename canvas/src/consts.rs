//! Shared numeric constants for the canvas crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Lower zoom bound for wheel zoom and the zoom buttons.
pub const INTERACTIVE_ZOOM_MIN: f64 = 0.4;

/// Lower zoom bound for fit-to-screen.
pub const FIT_ZOOM_MIN: f64 = 0.1;

/// Upper zoom bound shared by every zoom path.
pub const ZOOM_MAX: f64 = 3.0;

/// Zoom change per wheel pixel when zooming with ctrl/meta held.
pub const WHEEL_ZOOM_INTENSITY: f64 = 0.001;

/// Zoom change applied by a single zoom-in / zoom-out command.
pub const ZOOM_STEP: f64 = 0.5;

// ── Grid ────────────────────────────────────────────────────────

/// Grid quantum in world units once zoomed in past [`FINE_GRID_ABOVE_ZOOM`].
pub const FINE_GRID: f64 = 20.0;

/// Grid quantum in world units at or below [`FINE_GRID_ABOVE_ZOOM`].
pub const COARSE_GRID: f64 = 50.0;

/// Zoom level above which the fine grid applies.
pub const FINE_GRID_ABOVE_ZOOM: f64 = 1.0;

// ── Boxes ───────────────────────────────────────────────────────

/// Side length of every box in world units (two coarse grid cells).
pub const BOX_SIZE: f64 = 100.0;

/// Screen padding kept around the content by fit-to-screen, in pixels.
pub const FIT_PADDING_PX: f64 = 100.0;

/// Smallest extent used for a bounding box side, keeps fit math away from division by zero.
pub const MIN_FIT_EXTENT: f64 = 1e-6;
