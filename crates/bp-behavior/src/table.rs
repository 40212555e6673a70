//! Kind → rule dispatch.

use bp_core::BehaviorKind;

use crate::{Flee, Idle, MasterLure, Seek, SizeAware, SteeringRule};

/// One [`SteeringRule`] per [`BehaviorKind`].
///
/// Lookup is a direct index by `BehaviorKind::index()`.  Replacing a kind's
/// behavior is a call to [`set`](Self::set), not a new entity type.
pub struct SteeringTable {
    rules: Vec<Box<dyn SteeringRule>>,
}

impl SteeringTable {
    /// A table where every kind is [`Idle`].
    pub fn idle() -> Self {
        let rules = BehaviorKind::ALL
            .iter()
            .map(|_| Box::new(Idle) as Box<dyn SteeringRule>)
            .collect();
        Self { rules }
    }

    /// Replace the rule for `kind`.
    pub fn set<R: SteeringRule>(&mut self, kind: BehaviorKind, rule: R) -> &mut Self {
        self.rules[kind.index()] = Box::new(rule);
        self
    }

    /// The rule currently bound to `kind`.
    #[inline]
    pub fn rule(&self, kind: BehaviorKind) -> &dyn SteeringRule {
        self.rules[kind.index()].as_ref()
    }
}

impl Default for SteeringTable {
    /// The standard game rules:
    ///
    /// | Kind        | Rule         |
    /// |-------------|--------------|
    /// | Consuming   | [`Seek`]       |
    /// | Evading     | [`Flee`]       |
    /// | Intelligent | [`SizeAware`]  |
    /// | Master      | [`MasterLure`] |
    /// | others      | [`Idle`]       |
    fn default() -> Self {
        let mut table = Self::idle();
        table
            .set(BehaviorKind::Consuming, Seek)
            .set(BehaviorKind::Evading, Flee)
            .set(BehaviorKind::Intelligent, SizeAware)
            .set(BehaviorKind::Master, MasterLure);
        table
    }
}
