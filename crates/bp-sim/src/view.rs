use bp_core::{BehaviorKind, EntityId, Rgb, Vec2};
use bp_entity::Entity;

/// The drawable part of an entity, detached from the store.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityView {
    pub id:       EntityId,
    pub kind:     BehaviorKind,
    pub position: Vec2,
    pub radius:   f64,
    pub color:    Rgb,
}

impl From<&Entity> for EntityView {
    fn from(e: &Entity) -> Self {
        Self {
            id:       e.id,
            kind:     e.kind,
            position: e.position,
            radius:   e.radius,
            color:    e.color,
        }
    }
}
