//! `bp-collision`: who touched whom, and what it cost them.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`overlap`]  | `overlaps`: the circle intersection test                     |
//! | [`rules`]    | `CollisionRules`: size step, crush radius, elimination area  |
//! | [`outcome`]  | `ContactOutcome`, `ContactKind`, `CollisionReport`           |
//! | [`resolver`] | `CollisionResolver`: pairwise resolution and cleanup         |
//!
//! # Resolution order
//!
//! Every unordered pair `(i, j)` with `i < j` in store order is tested once.
//! A pair's radius changes are visible to every later pair in the same pass,
//! so the order matters and is fixed by the store's ascending-id layout.
//! Nothing is removed mid-pass; [`CollisionResolver::cleanup`] runs after
//! the last pair.

pub mod outcome;
pub mod overlap;
pub mod resolver;
pub mod rules;


pub use outcome::{CollisionReport, ContactKind, ContactOutcome};
pub use overlap::overlaps;
pub use resolver::CollisionResolver;
pub use rules::CollisionRules;
