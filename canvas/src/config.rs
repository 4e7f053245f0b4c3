//! Board policy: zoom bounds, grid policy, box size and wheel behavior.
//!
//! Every knob has a default matching the reference board, so
//! `BoardConfig::default()` is always valid. Configs loaded from elsewhere go
//! through [`BoardConfig::validate`] before an engine accepts them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::camera::ZoomLimits;
use crate::consts::{BOX_SIZE, FIT_PADDING_PX, WHEEL_ZOOM_INTENSITY, ZOOM_STEP};
use crate::doc::{ColorSpec, Swatch};
use crate::snap::GridPolicy;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{which} zoom limits must be finite and positive (min {min}, max {max})")]
    NonPositiveZoom { which: &'static str, min: f64, max: f64 },
    #[error("{which} zoom limits are inverted (min {min} > max {max})")]
    InvertedZoom { which: &'static str, min: f64, max: f64 },
    #[error("grid {which} size must be finite and positive, got {value}")]
    InvalidGrid { which: &'static str, value: f64 },
    #[error("box size must be finite and non-negative, got {0}")]
    InvalidBoxSize(f64),
    #[error("{which} must be finite and non-negative, got {value}")]
    InvalidScalar { which: &'static str, value: f64 },
}

/// Which axes an unmodified wheel scroll pans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelPan {
    /// Pan horizontally by `dx` and vertically by `dy`.
    #[default]
    Both,
    /// Pan vertically by `dy` only.
    Vertical,
}

/// Color given to boxes created by the add command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnColor {
    Fixed(ColorSpec),
    /// A random hue at 70% saturation and 50% lightness.
    RandomHue,
}

impl Default for SpawnColor {
    fn default() -> Self {
        Self::Fixed(ColorSpec::Swatch(Swatch::Cyan))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub interactive_zoom: ZoomLimits,
    pub fit_zoom: ZoomLimits,
    pub grid: GridPolicy,
    pub box_size: f64,
    pub wheel_zoom_intensity: f64,
    pub zoom_step: f64,
    pub fit_padding: f64,
    pub wheel_pan: WheelPan,
    pub spawn_color: SpawnColor,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            interactive_zoom: ZoomLimits::INTERACTIVE,
            fit_zoom: ZoomLimits::FIT,
            grid: GridPolicy::default(),
            box_size: BOX_SIZE,
            wheel_zoom_intensity: WHEEL_ZOOM_INTENSITY,
            zoom_step: ZOOM_STEP,
            fit_padding: FIT_PADDING_PX,
            wheel_pan: WheelPan::default(),
            spawn_color: SpawnColor::default(),
        }
    }
}

impl BoardConfig {
    /// Check every numeric knob.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: zoom limits that could let
    /// zoom reach zero or that are inverted, a non-positive grid size, or a
    /// negative / non-finite scalar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_limits("interactive", self.interactive_zoom)?;
        check_limits("fit", self.fit_zoom)?;
        check_grid("fine", self.grid.fine)?;
        check_grid("coarse", self.grid.coarse)?;
        if !self.grid.fine_above_zoom.is_finite() {
            return Err(ConfigError::InvalidScalar { which: "grid threshold", value: self.grid.fine_above_zoom });
        }
        if !self.box_size.is_finite() || self.box_size < 0.0 {
            return Err(ConfigError::InvalidBoxSize(self.box_size));
        }
        check_scalar("wheel zoom intensity", self.wheel_zoom_intensity)?;
        check_scalar("zoom step", self.zoom_step)?;
        check_scalar("fit padding", self.fit_padding)?;
        Ok(())
    }

    /// Widest zoom range any path may produce; used to clamp externally supplied cameras.
    #[must_use]
    pub fn outer_zoom(&self) -> ZoomLimits {
        ZoomLimits {
            min: self.interactive_zoom.min.min(self.fit_zoom.min),
            max: self.interactive_zoom.max.max(self.fit_zoom.max),
        }
    }
}

fn check_limits(which: &'static str, limits: ZoomLimits) -> Result<(), ConfigError> {
    let ZoomLimits { min, max } = limits;
    if !min.is_finite() || !max.is_finite() || min <= 0.0 || max <= 0.0 {
        return Err(ConfigError::NonPositiveZoom { which, min, max });
    }
    if min > max {
        return Err(ConfigError::InvertedZoom { which, min, max });
    }
    Ok(())
}

fn check_grid(which: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidGrid { which, value });
    }
    Ok(())
}

fn check_scalar(which: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidScalar { which, value });
    }
    Ok(())
}
