//! `bp-motion`: advancing entities and reflecting them off the arena edges.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`bounds`]   | `Bounds` (arena rectangle + Bouncy edge), `Axis`, `Wall`   |
//! | [`integrator`] | `MotionIntegrator`: reflect, step, advance the whole set   |
//!
//! # Movement model
//!
//! Each tick every live entity is first checked against the arena edges,
//! then moved by exactly one velocity step:
//!
//! 1. A reflection fires only when the entity is beyond an edge **and**
//!    still heading further out.  An entity that has already been turned
//!    around is left alone, so reflection happens once per crossing.
//! 2. Positions are never clamped; the reflected velocity carries the entity
//!    back inside on the following ticks.
//! 3. Bouncy entities have an extra right-hand edge at `Bounds::bouncy_max_x`.

pub mod bounds;
pub mod integrator;

#[cfg(test)]
mod tests;

pub use bounds::{Axis, Bounds, Wall};
pub use integrator::MotionIntegrator;
