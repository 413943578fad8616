use thiserror::Error;

/// A payload or record failed the field checks of the transaction schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Transaction with ID {0} not found")]
    NotFound(i64),

    #[error("Duplicate transaction ID {0} in initial records")]
    DuplicateId(i64),

    #[error("Transaction ID {0} is not a positive integer")]
    InvalidId(i64),

    #[error("No transaction IDs left to assign")]
    IdSpaceExhausted,
}
