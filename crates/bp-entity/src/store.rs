//! The ordered active-entity set.
//!
//! # Why a sorted `Vec`?
//!
//! The arena holds a few dozen entities, and every consumer scans all of
//! them each tick.  A contiguous `Vec<Entity>` kept in ascending id order
//! gives cache-friendly scans, deterministic iteration order, and
//! `O(log n)` lookup by id via binary search.  Ids are allocated
//! monotonically and never reused, so removal (an order-preserving
//! `retain`) never disturbs the ordering.

use bp_core::EntityId;

use crate::{Entity, EntityResult, EntitySpec};

/// Exclusive owner of every live entity in a round.
#[derive(Debug)]
pub struct EntityStore {
    entities: Vec<Entity>,
    next_id:  EntityId,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id:  EntityId(0),
        }
    }

    /// Pre-allocate room for `capacity` entities.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
            next_id:  EntityId(0),
        }
    }

    /// Validate `spec` and add it to the active set under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::Invalid`][crate::EntityError::Invalid] if the
    /// spec fails validation; the store is left unchanged.
    pub fn spawn(&mut self, spec: EntitySpec) -> EntityResult<EntityId> {
        spec.validate()?;

        let id = self.next_id;
        self.next_id = id.next();
        self.entities.push(Entity {
            id,
            kind:      spec.kind,
            position:  spec.position,
            velocity:  spec.velocity,
            radius:    spec.radius,
            max_speed: spec.max_speed,
            color:     spec.kind.color(),
            alive:     true,
        });
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in ascending id order.
    #[inline]
    pub fn as_slice(&self) -> &[Entity] {
        &self.entities
    }

    /// Mutable entities in ascending id order.  Ids must not be rewritten.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> + '_ {
        self.entities.iter_mut()
    }

    /// Iterator over all live `EntityId`s in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().map(|e| e.id)
    }

    /// Slot of `id` in [`as_slice`](Self::as_slice), if present.
    #[inline]
    pub fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.binary_search_by_key(&id, |e| e.id).ok()
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index_of(id).map(|i| &self.entities[i])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.index_of(id).map(move |i| &mut self.entities[i])
    }

    /// Disjoint mutable references to the entities at slots `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i == j` or either slot is out of bounds.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Entity, &mut Entity) {
        assert_ne!(i, j, "pair_mut requires two distinct slots");
        if i < j {
            let (head, tail) = self.entities.split_at_mut(j);
            (&mut head[i], &mut tail[0])
        } else {
            let (head, tail) = self.entities.split_at_mut(i);
            (&mut tail[0], &mut head[j])
        }
    }

    /// Remove one entity by id, returning it with `alive` cleared.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.index_of(id)?;
        let mut entity = self.entities.remove(index);
        entity.alive = false;
        Some(entity)
    }

    /// Remove every entity matching `pred`, preserving the order of both the
    /// survivors and the returned removals.
    pub fn remove_where<F>(&mut self, mut pred: F) -> Vec<Entity>
    where
        F: FnMut(&Entity) -> bool,
    {
        let mut removed = Vec::new();
        for entity in self.entities.iter_mut() {
            if pred(entity) {
                entity.alive = false;
            }
        }
        self.entities.retain(|e| {
            if e.alive {
                true
            } else {
                removed.push(e.clone());
                false
            }
        });
        removed
    }

    /// Drop every entity.  Id allocation keeps counting, so an id seen in a
    /// previous round never names an entity of the next one.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
