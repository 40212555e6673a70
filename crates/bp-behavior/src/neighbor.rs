//! Nearest-neighbor lookup.

use bp_entity::Entity;

use crate::{BehaviorError, BehaviorResult};

/// The candidate nearest to `reference` by center distance.
///
/// `reference` itself is skipped by id, so it may (and usually does) appear
/// in `candidates`.  Squared distances are compared; on a tie the candidate
/// encountered first wins.
///
/// # Errors
///
/// [`BehaviorError::EmptyNeighborhood`] when `candidates` holds nothing but
/// `reference`.
pub fn closest<'a, I>(reference: &Entity, candidates: I) -> BehaviorResult<&'a Entity>
where
    I: IntoIterator<Item = &'a Entity>,
{
    let mut best: Option<(&'a Entity, f64)> = None;
    for candidate in candidates {
        if candidate.id == reference.id {
            continue;
        }
        let d = reference.position.distance_squared(candidate.position);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((candidate, d)),
        }
    }
    best.map(|(e, _)| e)
        .ok_or(BehaviorError::EmptyNeighborhood(reference.id))
}
