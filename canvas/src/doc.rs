//! Document model: boxes, their colors, and the in-memory store.
//!
//! A box is a fixed-size square anchored at its top-left corner in world
//! space. The store keeps boxes in insertion order, which doubles as draw
//! order: later boxes are drawn on top and win hit-tests.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::{Point, Rect};

/// Unique identifier for a box.
pub type EntityId = Uuid;

/// Named palette colors offered by the color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swatch {
    Red,
    Orange,
    Amber,
    Green,
    Cyan,
    Blue,
    Purple,
}

impl Swatch {
    /// Every swatch in picker order.
    pub const ALL: [Swatch; 7] =
        [Self::Red, Self::Orange, Self::Amber, Self::Green, Self::Cyan, Self::Blue, Self::Purple];

    /// Fill color as a CSS hex string.
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::Red => "#ef4444",
            Self::Orange => "#f97316",
            Self::Amber => "#f59e0b",
            Self::Green => "#22c55e",
            Self::Cyan => "#06b6d4",
            Self::Blue => "#3b82f6",
            Self::Purple => "#a855f7",
        }
    }
}

/// A box fill color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpec {
    /// One of the palette colors.
    Swatch(Swatch),
    /// Hue in degrees, saturation and lightness in percent.
    Hsl { hue: f64, saturation: f64, lightness: f64 },
    /// A custom CSS hex color such as `"#12ab34"`.
    Hex(String),
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::Swatch(Swatch::Cyan)
    }
}

impl ColorSpec {
    /// Render as a CSS color value.
    #[must_use]
    pub fn css(&self) -> String {
        match self {
            Self::Swatch(s) => s.hex().to_string(),
            Self::Hsl { hue, saturation, lightness } => format!("hsl({hue}, {saturation}%, {lightness}%)"),
            Self::Hex(hex) => hex.clone(),
        }
    }
}

/// A box on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier, fixed at creation.
    pub id: EntityId,
    /// Left edge in world coordinates; a grid multiple once snapped.
    pub x: f64,
    /// Top edge in world coordinates; a grid multiple once snapped.
    pub y: f64,
    pub color: ColorSpec,
}

impl Entity {
    /// Create a box with a fresh random id.
    #[must_use]
    pub fn new(x: f64, y: f64, color: ColorSpec) -> Self {
        Self { id: Uuid::new_v4(), x, y, color }
    }

    /// Top-left anchor.
    #[must_use]
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// World-space bounds for a square box of side `size`.
    #[must_use]
    pub fn bounds(&self, size: f64) -> Rect {
        Rect::from_origin_size(self.anchor(), size, size)
    }
}

/// In-memory store of boxes, ordered bottom to top.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
}

impl EntityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { entities: Vec::new() }
    }

    /// Insert a box on top. A box with the same `id` is replaced in place.
    pub fn insert(&mut self, entity: Entity) {
        if let Some(slot) = self.entities.iter_mut().find(|e| e.id == entity.id) {
            *slot = entity;
        } else {
            self.entities.push(entity);
        }
    }

    /// Remove a box by id, returning it if it was present.
    pub fn remove(&mut self, id: &EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == *id)?;
        Some(self.entities.remove(idx))
    }

    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Move a box. Returns false if the box doesn't exist.
    pub fn set_position(&mut self, id: &EntityId, pos: Point) -> bool {
        let Some(entity) = self.entities.iter_mut().find(|e| e.id == *id) else {
            return false;
        };
        entity.x = pos.x;
        entity.y = pos.y;
        true
    }

    /// Recolor a box. Returns false if the box doesn't exist.
    pub fn set_color(&mut self, id: &EntityId, color: ColorSpec) -> bool {
        let Some(entity) = self.entities.iter_mut().find(|e| e.id == *id) else {
            return false;
        };
        entity.color = color;
        true
    }

    /// All boxes, bottom first.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Bounding box of every box including its extent, or `None` when empty.
    #[must_use]
    pub fn bounds(&self, box_size: f64) -> Option<Rect> {
        self.entities
            .iter()
            .map(|e| e.bounds(box_size))
            .reduce(|acc, r| acc.union(r))
    }

    /// Number of boxes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the store contains no boxes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
