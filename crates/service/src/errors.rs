use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The backing store could not be read or written. The detail is for logs only.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl ServiceError {
    pub fn store(err: impl std::fmt::Display) -> Self { Self::StoreUnavailable(err.to_string()) }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self { Self::store(e) }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self { Self::store(e) }
}
