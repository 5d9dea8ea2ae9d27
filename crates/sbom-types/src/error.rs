use thiserror::Error;

/// Errors produced while parsing or converting registry types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid component id: {0:?}")]
    InvalidId(String),
}
