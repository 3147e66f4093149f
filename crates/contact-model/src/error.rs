use thiserror::Error;

/// Reasons a single input row is skipped during merging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("missing required column `{0}`")]
    MissingField(&'static str),
    #[error("external identifier is empty")]
    EmptyIdentifier,
    #[error("column `{0}` appears more than once")]
    RepeatedField(&'static str),
}

pub type Result<T> = std::result::Result<T, RowError>;
