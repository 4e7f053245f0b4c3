//! Input model: buttons, modifier keys, wheel deltas, and gesture state.
//!
//! The public types here are the payloads hosts pass into
//! [`crate::engine::EngineCore`]. [`InputState`] is the in-flight gesture
//! record; it stays private to the interaction controller and only its
//! [`DragMode`] summary is visible outside the crate.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::doc::EntityId;

/// Keyboard modifier keys held during a wheel event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` index.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Which layer received a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// The board itself; the engine hit-tests boxes spatially.
    #[default]
    Board,
    /// Host UI drawn over the board (buttons, pickers). Never starts a gesture.
    Chrome,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Observable summary of the active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    #[default]
    Idle,
    PanCamera,
    DragBox,
}

/// Gesture record kept between pointer-down and pointer-up.
///
/// Each active variant carries exactly the context its move handler needs,
/// so a box drag can never lack its target or anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Panning the camera with the secondary button.
    Panning {
        /// Screen position at the previous event; pan deltas are incremental.
        last_screen: Point,
    },
    /// Moving a box with the primary button.
    DraggingBox {
        /// Id of the box being dragged.
        id: EntityId,
        /// Screen position of the pointer-down; box deltas are totals from here.
        start_screen: Point,
        /// Box anchor at pointer-down.
        anchor: Point,
    },
}

impl InputState {
    pub(crate) fn mode(&self) -> DragMode {
        match self {
            Self::Idle => DragMode::Idle,
            Self::Panning { .. } => DragMode::PanCamera,
            Self::DraggingBox { .. } => DragMode::DragBox,
        }
    }
}
