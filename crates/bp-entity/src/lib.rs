//! `bp-entity`: entity records and the active-entity store.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`entity`]  | `Entity`: position, velocity, radius, kind, alive flag      |
//! | [`spec`]    | `EntitySpec`: unvalidated construction parameters           |
//! | [`store`]   | `EntityStore`: ordered active set with monotonic ids        |
//! | [`error`]   | `EntityError`, `EntityResult<T>`                            |
//!
//! # Ordering
//!
//! The store keeps entities in ascending `EntityId` order, which is also
//! spawn order.  Every scan in the workspace (nearest neighbor, collision
//! pairs, cleanup) iterates in this order, so tie-breaks are deterministic.

pub mod entity;
pub mod error;
pub mod spec;
pub mod store;

#[cfg(test)]
mod tests;

pub use entity::Entity;
pub use error::{EntityError, EntityResult};
pub use spec::EntitySpec;
pub use store::EntityStore;
