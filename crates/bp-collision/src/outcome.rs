//! What a resolution pass reports back.

use bp_core::EntityId;

/// How one overlapping pair was resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContactKind {
    /// Neither side was a Master: `grower` gained one size step, `shrinker`
    /// lost one.
    Generic { grower: EntityId, shrinker: EntityId },

    /// A Master was involved: `victim` was set to the crush radius and
    /// `master` to zero.
    MasterCrush { master: EntityId, victim: EntityId },
}

/// One resolved pair, in the order the pair was tested.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContactOutcome {
    /// First operand (lower store index).
    pub a: EntityId,
    /// Second operand.
    pub b: EntityId,
    pub kind: ContactKind,
    /// The player took part in this contact and its radius went down.
    pub player_shrunk: bool,
}

/// Every contact resolved in one pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub outcomes: Vec<ContactOutcome>,
}

impl CollisionReport {
    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// `true` if any contact this pass shrank the player.
    pub fn player_shrunk(&self) -> bool {
        self.outcomes.iter().any(|o| o.player_shrunk)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactOutcome> + '_ {
        self.outcomes.iter()
    }
}
