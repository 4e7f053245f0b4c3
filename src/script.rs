//! Scripted input for the headless host.
//!
//! A script is JSON Lines: one [`ScriptEvent`] per line, tagged by `"event"`.
//! Boxes are addressed by creation index because their ids are random.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use canvas::camera::Point;
use canvas::doc::{ColorSpec, EntityId};
use canvas::engine::{Action, EngineCore};
use canvas::input::{Button, Modifiers, Surface, WheelDelta};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Parse { line: usize, source: serde_json::Error },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown {
        x: f64,
        y: f64,
        button: Button,
        #[serde(default)]
        target: Surface,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    PointerLeave,
    Wheel {
        x: f64,
        y: f64,
        #[serde(default)]
        dx: f64,
        #[serde(default)]
        dy: f64,
        #[serde(flatten)]
        modifiers: Modifiers,
    },
    AddBox,
    DeleteBox {
        index: usize,
    },
    SetColor {
        index: usize,
        color: ColorSpec,
    },
    FocusBox {
        index: usize,
    },
    ZoomIn,
    ZoomOut,
    ZoomReset,
    FitToScreen,
    Resize {
        width: f64,
        height: f64,
    },
}

/// Parse a JSON Lines script. Blank lines and `#` comments are skipped.
///
/// # Errors
///
/// Returns [`ScriptError::Parse`] with the 1-based line number of the first
/// malformed line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|source| ScriptError::Parse { line: i + 1, source })?;
        events.push(event);
    }
    Ok(events)
}

/// Drives an [`EngineCore`] from script events.
#[derive(Debug)]
pub struct Replay {
    engine: EngineCore,
    created: Vec<EntityId>,
}

impl Replay {
    pub fn new(engine: EngineCore) -> Self {
        Self { engine, created: Vec::new() }
    }

    pub fn engine(&self) -> &EngineCore {
        &self.engine
    }

    /// Apply one event and return the actions it committed.
    pub fn apply(&mut self, event: &ScriptEvent) -> Vec<Action> {
        let actions = match event {
            ScriptEvent::PointerDown { x, y, button, target } => {
                self.engine.on_pointer_down(Point::new(*x, *y), *button, *target)
            }
            ScriptEvent::PointerMove { x, y } => self.engine.on_pointer_move(Point::new(*x, *y)),
            ScriptEvent::PointerUp => self.engine.on_pointer_up(),
            ScriptEvent::PointerLeave => self.engine.on_pointer_leave(),
            ScriptEvent::Wheel { x, y, dx, dy, modifiers } => {
                self.engine.on_wheel(Point::new(*x, *y), WheelDelta { dx: *dx, dy: *dy }, *modifiers)
            }
            ScriptEvent::AddBox => self.engine.add_entity(),
            ScriptEvent::DeleteBox { index } => match self.box_id(*index) {
                Some(id) => self.engine.delete_entity(&id),
                None => Vec::new(),
            },
            ScriptEvent::SetColor { index, color } => match self.box_id(*index) {
                Some(id) => self.engine.set_entity_color(&id, color.clone()),
                None => Vec::new(),
            },
            ScriptEvent::FocusBox { index } => match self.box_id(*index) {
                Some(id) => self.engine.focus_entity(&id),
                None => Vec::new(),
            },
            ScriptEvent::ZoomIn => self.engine.zoom_in(),
            ScriptEvent::ZoomOut => self.engine.zoom_out(),
            ScriptEvent::ZoomReset => self.engine.zoom_reset(),
            ScriptEvent::FitToScreen => self.engine.fit_to_screen(),
            ScriptEvent::Resize { width, height } => {
                self.engine.set_viewport(*width, *height);
                Vec::new()
            }
        };

        for action in &actions {
            if let Action::EntityCreated(entity) = action {
                self.created.push(entity.id);
            }
        }
        debug!(?event, actions = actions.len(), "event applied");
        actions
    }

    fn box_id(&self, index: usize) -> Option<EntityId> {
        let id = self.created.get(index).copied();
        if id.is_none() {
            warn!(index, created = self.created.len(), "no box at index");
        }
        id
    }
}
