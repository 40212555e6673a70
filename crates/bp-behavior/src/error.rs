use bp_core::EntityId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BehaviorError {
    /// No entity other than the reference exists.  Steering treats this as
    /// "skip this tick", never as a failure.
    #[error("no neighbor for entity {0}")]
    EmptyNeighborhood(EntityId),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
