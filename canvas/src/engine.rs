//! Engine facade: routes input events and commands, returns committed changes.
//!
//! [`EngineCore`] owns the viewport, the entity store, the selection and the
//! interaction controller. Every handler runs synchronously to completion and
//! returns the [`Action`]s it committed; a handler that changed nothing
//! returns an empty vector. Hosts re-render by reading [`EngineCore::camera`]
//! and [`EngineCore::entities`] (or [`EngineCore::snapshot`]) afterwards.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::camera::{Axis, Camera, Point};
use crate::config::{BoardConfig, ConfigError, SpawnColor, WheelPan};
use crate::doc::{ColorSpec, Entity, EntityId, EntityStore};
use crate::hit::hit_test;
use crate::input::{Button, DragMode, Modifiers, Surface, WheelDelta};
use crate::interaction::{Interaction, Motion, Press};
use crate::snap::snap_point;
use crate::viewport::{GridPattern, Viewport};

/// Committed changes returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    CameraChanged(Camera),
    EntityCreated(Entity),
    EntityMoved { id: EntityId, x: f64, y: f64 },
    EntityDeleted { id: EntityId },
    EntityRecolored { id: EntityId, color: ColorSpec },
    SelectionChanged { id: Option<EntityId> },
}

/// Committed board state, safe to hand to a renderer or serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub camera: Camera,
    pub grid_size: f64,
    pub grid: GridPattern,
    pub selection: Option<EntityId>,
    pub entities: Vec<Entity>,
}

/// Core engine state: everything except drawing.
#[derive(Debug, Clone)]
pub struct EngineCore {
    doc: EntityStore,
    viewport: Viewport,
    interaction: Interaction,
    selection: Option<EntityId>,
    config: BoardConfig,
}

impl Default for EngineCore {
    fn default() -> Self {
        let config = BoardConfig::default();
        Self {
            doc: EntityStore::new(),
            viewport: Viewport::new(&config),
            interaction: Interaction::new(),
            selection: None,
            config,
        }
    }
}

impl EngineCore {
    /// Engine with the default board policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom board policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails [`BoardConfig::validate`].
    pub fn with_config(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            doc: EntityStore::new(),
            viewport: Viewport::new(&config),
            interaction: Interaction::new(),
            selection: None,
            config,
        })
    }

    // --- Data inputs ---

    /// Update the surface size in screen pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport.set_size(width, height);
    }

    /// Replace the camera (zoom is clamped into the configured range).
    pub fn set_camera(&mut self, camera: Camera) -> Vec<Action> {
        let before = self.viewport.camera();
        self.viewport.set_camera(camera);
        self.camera_action_if_changed(before)
    }

    /// Insert a box supplied by the host, on top of the stack.
    pub fn insert_entity(&mut self, entity: Entity) {
        self.doc.insert(entity);
    }

    // --- Pointer input ---

    /// Pointer pressed at `screen`. Presses on `Surface::Chrome` never start a gesture.
    pub fn on_pointer_down(&mut self, screen: Point, button: Button, surface: Surface) -> Vec<Action> {
        let hit = match surface {
            Surface::Chrome => None,
            Surface::Board => {
                let world = self.viewport.screen_to_world(screen);
                Some(hit_test(world, &self.doc, self.config.box_size))
            }
        };

        match self.interaction.pointer_down(screen, button, hit, &self.doc) {
            Press::DragStarted(id) => self.select(Some(id)).into_iter().collect(),
            Press::Background => self.select(None).into_iter().collect(),
            Press::PanStarted | Press::Ignored => Vec::new(),
        }
    }

    /// Pointer moved to `screen`. Only has an effect while a gesture is active.
    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        match self.interaction.pointer_move(screen, &mut self.viewport, &mut self.doc) {
            Motion::None => Vec::new(),
            Motion::Panned => vec![Action::CameraChanged(self.viewport.camera())],
            Motion::Moved { id, pos } => vec![Action::EntityMoved { id, x: pos.x, y: pos.y }],
        }
    }

    /// Pointer released. Ends any gesture.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.interaction.release();
        Vec::new()
    }

    /// Pointer left the board surface. Ends any gesture, same as release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    /// Wheel or trackpad scroll at `screen`.
    ///
    /// Ctrl (without shift) or meta zooms about the pointer. Otherwise shift
    /// pans horizontally by the vertical delta, and no modifier pans per
    /// [`WheelPan`].
    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        let before = self.viewport.camera();

        if (modifiers.ctrl && !modifiers.shift) || modifiers.meta {
            self.viewport.zoom_at(screen, -delta.dy * self.config.wheel_zoom_intensity);
        } else if modifiers.shift {
            self.viewport.pan_axis(Axis::Horizontal, -delta.dy);
        } else {
            match self.config.wheel_pan {
                WheelPan::Both => self.viewport.pan_by(-delta.dx, -delta.dy),
                WheelPan::Vertical => self.viewport.pan_axis(Axis::Vertical, -delta.dy),
            }
        }

        self.camera_action_if_changed(before)
    }

    // --- Commands ---

    /// Create a box at the grid point nearest the viewport center.
    pub fn add_entity(&mut self) -> Vec<Action> {
        let pos = snap_point(self.viewport.center_world(), self.viewport.grid_size());
        let entity = Entity::new(pos.x, pos.y, self.spawn_color());
        debug!(id = %entity.id, x = pos.x, y = pos.y, "box created");
        self.doc.insert(entity.clone());
        vec![Action::EntityCreated(entity)]
    }

    /// Delete a box. Clears the selection if it pointed at the box.
    pub fn delete_entity(&mut self, id: &EntityId) -> Vec<Action> {
        if self.doc.remove(id).is_none() {
            return Vec::new();
        }
        debug!(%id, "box deleted");
        let mut actions = vec![Action::EntityDeleted { id: *id }];
        if self.selection == Some(*id) {
            actions.extend(self.select(None));
        }
        actions
    }

    /// Recolor a box. No-op for unknown ids.
    pub fn set_entity_color(&mut self, id: &EntityId, color: ColorSpec) -> Vec<Action> {
        if !self.doc.set_color(id, color.clone()) {
            return Vec::new();
        }
        vec![Action::EntityRecolored { id: *id, color }]
    }

    /// Pan so the box's center sits at the viewport center. No-op for unknown ids.
    pub fn focus_entity(&mut self, id: &EntityId) -> Vec<Action> {
        let Some(center) = self.doc.get(id).map(|e| e.bounds(self.config.box_size).center()) else {
            return Vec::new();
        };
        let before = self.viewport.camera();
        self.viewport.focus_on(center);
        self.camera_action_if_changed(before)
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        let before = self.viewport.camera();
        self.viewport.zoom_in();
        self.camera_action_if_changed(before)
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        let before = self.viewport.camera();
        self.viewport.zoom_out();
        self.camera_action_if_changed(before)
    }

    pub fn zoom_reset(&mut self) -> Vec<Action> {
        let before = self.viewport.camera();
        self.viewport.reset();
        self.camera_action_if_changed(before)
    }

    /// Fit every box on screen. No-op when the board is empty.
    pub fn fit_to_screen(&mut self) -> Vec<Action> {
        let before = self.viewport.camera();
        if !self.viewport.fit_to_content(&self.doc, self.config.box_size, self.config.fit_padding) {
            return Vec::new();
        }
        debug!(zoom = self.viewport.camera().zoom, boxes = self.doc.len(), "fit to screen");
        self.camera_action_if_changed(before)
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.viewport.camera()
    }

    /// All boxes, bottom first.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        self.doc.entities()
    }

    /// Look up a box by id.
    #[must_use]
    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.doc.get(id)
    }

    /// The currently selected box, if any.
    #[must_use]
    pub fn selection(&self) -> Option<EntityId> {
        self.selection
    }

    /// Which gesture is in progress.
    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn grid_size(&self) -> f64 {
        self.viewport.grid_size()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Committed state for rendering; excludes the in-flight gesture.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            camera: self.viewport.camera(),
            grid_size: self.viewport.grid_size(),
            grid: self.viewport.grid_pattern(),
            selection: self.selection,
            entities: self.doc.entities().to_vec(),
        }
    }

    // --- Internals ---

    fn select(&mut self, id: Option<EntityId>) -> Option<Action> {
        if self.selection == id {
            return None;
        }
        self.selection = id;
        Some(Action::SelectionChanged { id })
    }

    fn camera_action_if_changed(&self, before: Camera) -> Vec<Action> {
        let after = self.viewport.camera();
        if after == before { Vec::new() } else { vec![Action::CameraChanged(after)] }
    }

    fn spawn_color(&self) -> ColorSpec {
        match &self.config.spawn_color {
            SpawnColor::Fixed(color) => color.clone(),
            SpawnColor::RandomHue => {
                ColorSpec::Hsl { hue: rand::rng().random_range(0.0..360.0), saturation: 70.0, lightness: 50.0 }
            }
        }
    }
}
