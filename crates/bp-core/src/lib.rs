//! `bp-core`: foundational types for the `ballpit` simulation.
//!
//! This crate is a dependency of every other `bp-*` crate.  It has no `bp-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `EntityId`                                            |
//! | [`geo`]    | `Vec2`: planar position / velocity vector             |
//! | [`time`]   | `Tick`                                                |
//! | [`kind`]   | `BehaviorKind`, `Rgb` color tag                       |
//! | [`rng`]    | `SimRng` (simulation-level, seeded)                   |
//! | [`config`] | `ArenaConfig`: every tunable of a run                 |
//! | [`error`]  | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ArenaConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Vec2;
pub use ids::EntityId;
pub use kind::{BehaviorKind, Rgb};
pub use rng::SimRng;
pub use time::Tick;
