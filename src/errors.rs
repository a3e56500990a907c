use thiserror::Error;

#[derive(Debug, Error)]
pub enum HopGraphError {
    #[error("invalid parameter: {0}")]
    Parameter(String),
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),
    #[error("backend error: {0}")]
    Backend(String),
    #[error("both neighborhoods are empty")]
    EmptyNeighborhood,
}

impl HopGraphError {
    pub fn parameter<T: Into<String>>(msg: T) -> Self {
        HopGraphError::Parameter(msg.into())
    }

    pub fn schema_mismatch<T: Into<String>>(msg: T) -> Self {
        HopGraphError::SchemaMismatch(msg.into())
    }

    pub fn capacity_exceeded<T: Into<String>>(msg: T) -> Self {
        HopGraphError::CapacityExceeded(msg.into())
    }

    pub fn backend<T: Into<String>>(msg: T) -> Self {
        HopGraphError::Backend(msg.into())
    }
}
