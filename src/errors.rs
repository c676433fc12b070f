use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RasterError {
    /// Root bounds or tile size cannot describe a map.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A query is missing fields or describes a degenerate box.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl RasterError {
    pub fn configuration(message: impl Into<String>) -> Self {
        RasterError::Configuration(message.into())
    }

    pub fn invalid_query(message: impl Into<String>) -> Self {
        RasterError::InvalidQuery(message.into())
    }
}
