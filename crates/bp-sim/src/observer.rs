//! Simulation observer trait for progress reporting and presentation hooks.

use bp_core::Tick;

use crate::{SimEvent, SimState};

/// Callbacks invoked by [`Sim::run_ticks`][crate::Sim::run_ticks] around
/// every tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: sound cue
///
/// ```rust,ignore
/// struct Buzzer;
///
/// impl SimObserver for Buzzer {
///     fn on_events(&mut self, _tick: Tick, events: &[SimEvent]) {
///         if events.iter().any(|e| matches!(e, SimEvent::PlayerHitWall(_))) {
///             play_buzz();
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the tick's pipeline runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called with the tick's events, only when there is at least one.
    fn on_events(&mut self, _tick: Tick, _events: &[SimEvent]) {}

    /// Called after the tick.  `live` is the active-entity count after cleanup.
    fn on_tick_end(&mut self, _tick: Tick, _live: usize) {}

    /// Called when the tick ended the round.
    fn on_state_change(&mut self, _tick: Tick, _from: SimState, _to: SimState) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
