use bp_entity::Entity;

/// `true` when the two circles strictly intersect.
///
/// Touching circles (center distance equal to the radius sum) do not
/// overlap.  The test compares squared lengths, so no square root is taken.
#[inline]
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    let reach = a.radius + b.radius;
    a.position.distance_squared(b.position) < reach * reach
}
