//! Pointer gesture state machine.
//!
//! ```text
//! Idle --secondary on background--> Panning    --up/leave--> Idle
//! Idle --primary on box-----------> DraggingBox --up/leave--> Idle
//! ```
//!
//! Panning applies the per-event screen delta to the camera. Box dragging
//! recomputes the box position from its anchor at pointer-down plus the total
//! pointer displacement, converted to world units and snapped, so repeated
//! moves never accumulate rounding error.

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

use tracing::{debug, trace};

use crate::camera::Point;
use crate::doc::{EntityId, EntityStore};
use crate::hit::HitTarget;
use crate::input::{Button, DragMode, InputState};
use crate::snap::snap_point;
use crate::viewport::Viewport;

/// Outcome of a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    /// No gesture started (wrong button, chrome, or a gesture already active).
    Ignored,
    /// Primary press on empty board; starts nothing.
    Background,
    /// Camera panning started.
    PanStarted,
    /// Box drag started on the given box.
    DragStarted(EntityId),
}

/// Outcome of a pointer-move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Nothing committed.
    None,
    /// The camera moved.
    Panned,
    /// A box landed on a new snapped position.
    Moved { id: EntityId, pos: Point },
}

/// Owns the in-flight gesture record. Only [`DragMode`] is exposed.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    state: InputState,
}

impl Interaction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.state.mode()
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state != InputState::Idle
    }

    /// Classify a press. `hit` is `None` when the press landed on host chrome.
    pub fn pointer_down(&mut self, screen: Point, button: Button, hit: Option<HitTarget>, doc: &EntityStore) -> Press {
        if self.is_active() {
            trace!(?button, "pointer down during active gesture ignored");
            return Press::Ignored;
        }
        let Some(hit) = hit else {
            return Press::Ignored;
        };

        match (button, hit) {
            (Button::Secondary, HitTarget::Background) => {
                self.state = InputState::Panning { last_screen: screen };
                debug!(x = screen.x, y = screen.y, "pan started");
                Press::PanStarted
            }
            (Button::Primary, HitTarget::Entity(id)) => {
                let Some(entity) = doc.get(&id) else {
                    return Press::Ignored;
                };
                let anchor = entity.anchor();
                self.state = InputState::DraggingBox { id, start_screen: screen, anchor };
                debug!(%id, anchor_x = anchor.x, anchor_y = anchor.y, "box drag started");
                Press::DragStarted(id)
            }
            (Button::Primary, HitTarget::Background) => Press::Background,
            _ => Press::Ignored,
        }
    }

    /// Advance the active gesture to `screen`.
    pub fn pointer_move(&mut self, screen: Point, viewport: &mut Viewport, doc: &mut EntityStore) -> Motion {
        match self.state {
            InputState::Idle => Motion::None,
            InputState::Panning { last_screen } => {
                let dx = screen.x - last_screen.x;
                let dy = screen.y - last_screen.y;
                self.state = InputState::Panning { last_screen: screen };
                if dx == 0.0 && dy == 0.0 {
                    return Motion::None;
                }
                viewport.pan_by(dx, dy);
                trace!(dx, dy, "camera panned");
                Motion::Panned
            }
            InputState::DraggingBox { id, start_screen, anchor } => {
                let Some(current) = doc.get(&id).map(crate::doc::Entity::anchor) else {
                    debug!(%id, "dragged box no longer exists; move ignored");
                    return Motion::None;
                };
                let camera = viewport.camera();
                let raw = Point::new(
                    anchor.x + camera.screen_dist_to_world(screen.x - start_screen.x),
                    anchor.y + camera.screen_dist_to_world(screen.y - start_screen.y),
                );
                let pos = snap_point(raw, viewport.grid_size());
                if pos == current {
                    return Motion::None;
                }
                doc.set_position(&id, pos);
                trace!(%id, x = pos.x, y = pos.y, "box moved");
                Motion::Moved { id, pos }
            }
        }
    }

    /// End the gesture on pointer-up or pointer-leave. Returns the mode that ended.
    pub fn release(&mut self) -> DragMode {
        let ended = self.mode();
        if ended != DragMode::Idle {
            debug!(?ended, "gesture released");
        }
        self.state = InputState::Idle;
        ended
    }
}
