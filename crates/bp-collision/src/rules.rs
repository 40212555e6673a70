//! Numeric parameters of contact resolution.

use bp_core::ArenaConfig;

/// The three constants that decide a contact's outcome.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionRules {
    /// Radius moved from the smaller to the larger side of a generic contact.
    pub size_step: f64,

    /// Radius a non-master is left with after touching a Master.
    pub master_crush_radius: f64,

    /// Entities with `area <= elimination_area` are removed by cleanup.
    pub elimination_area: f64,
}

impl Default for CollisionRules {
    fn default() -> Self {
        Self::from(&ArenaConfig::default())
    }
}

impl From<&ArenaConfig> for CollisionRules {
    fn from(config: &ArenaConfig) -> Self {
        Self {
            size_step:           config.size_step,
            master_crush_radius: config.master_crush_radius,
            elimination_area:    config.elimination_area,
        }
    }
}
