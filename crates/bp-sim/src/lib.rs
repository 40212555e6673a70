//! `bp-sim`: round orchestration for the ballpit simulation.
//!
//! # Tick pipeline
//!
//! ```text
//! while state == Running:
//!   ① Steering : BehaviorEngine::plan reads pre-move state,
//!                 BehaviorEngine::apply adjusts velocities (ascending id).
//!   ② Motion   : reflect at the arena edges, then position += velocity.
//!   ③ Collision: resolve every overlapping pair once, in store order.
//!   ④ Cleanup  : remove entities with area ≤ elimination_area.
//!   ⑤ End check: player gone → PlayerLost; player alone → PlayerWon.
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Serde derives on `EntityView` and the config it reads.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bp_core::ArenaConfig;
//! use bp_sim::{NoopObserver, PlayerInput, SimBuilder};
//!
//! let mut sim = SimBuilder::new(ArenaConfig::default()).build()?;
//! loop {
//!     sim.set_player_target(PlayerInput::Point(cursor));
//!     for event in sim.tick()? {
//!         // play sounds, update the HUD, ...
//!     }
//!     draw(&sim.snapshot());
//! }
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod input;
pub mod observer;
pub mod population;
pub mod sim;
pub mod view;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{SimEvent, SimState};
pub use input::{Direction, PlayerInput};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use view::EntityView;
