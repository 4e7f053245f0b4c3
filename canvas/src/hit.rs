#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::doc::{EntityId, EntityStore};

/// What a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty board surface.
    Background,
    /// The topmost box under the pointer.
    Entity(EntityId),
}

/// Topmost box whose bounds contain `world_pt`. Later boxes win on overlap.
#[must_use]
pub fn hit_entity(world_pt: Point, doc: &EntityStore, box_size: f64) -> Option<EntityId> {
    doc.iter()
        .rev()
        .find(|e| e.bounds(box_size).contains(world_pt))
        .map(|e| e.id)
}

/// Classify a board-surface point; boxes take precedence over the background.
#[must_use]
pub fn hit_test(world_pt: Point, doc: &EntityStore, box_size: f64) -> HitTarget {
    hit_entity(world_pt, doc, box_size).map_or(HitTarget::Background, HitTarget::Entity)
}
