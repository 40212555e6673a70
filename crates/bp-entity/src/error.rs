use bp_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EntityError {
    #[error("invalid entity parameters: {0}")]
    Invalid(#[from] CoreError),
}

pub type EntityResult<T> = Result<T, EntityError>;
