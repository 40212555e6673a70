//! `bp-behavior`: nearest-neighbor queries and per-kind steering.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`neighbor`] | `closest`: nearest other entity by center distance              |
//! | [`steer`]    | `Steer`: a velocity adjustment requested by a rule              |
//! | [`context`]  | `SteeringContext<'a>`: read-only tick snapshot shared by rules  |
//! | [`rule`]     | `SteeringRule` trait and the built-in rules                     |
//! | [`table`]    | `SteeringTable`: `BehaviorKind` → rule dispatch                 |
//! | [`engine`]   | `BehaviorEngine`: plan and apply phases                         |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! The steering phase of a tick runs in two steps:
//!
//! 1. **Plan**: for every live entity, look up its kind's rule in the
//!    `SteeringTable` and evaluate it against a `SteeringContext`.  All
//!    reads see pre-move positions and this tick's radii; nothing mutates.
//!
//! 2. **Apply**: consume the collected `(EntityId, Steer)` list in
//!    ascending id order and adjust velocities.
//!
//! Every rule scans the full active set to find its nearest neighbor, so the
//! phase is quadratic in the entity count.  At a few dozen entities that is
//! cheaper than maintaining any index.

pub mod context;
pub mod engine;
pub mod error;
pub mod neighbor;
pub mod rule;
pub mod steer;
pub mod table;


pub use context::SteeringContext;
pub use engine::BehaviorEngine;
pub use error::{BehaviorError, BehaviorResult};
pub use neighbor::closest;
pub use rule::{Flee, Idle, MasterLure, Seek, SizeAware, SteeringRule};
pub use steer::Steer;
pub use table::SteeringTable;
