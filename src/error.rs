use thiserror::Error;

/// Failures reported by a [`CacheClient`](crate::CacheClient).
///
/// The hook layer never produces these itself; it only carries them from the
/// wrapped client to handlers and callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("cache miss")]
    CacheMiss,
    #[error("item not stored")]
    NotStored,
    #[error("compare-and-swap conflict")]
    CasConflict,
    #[error("malformed key")]
    MalformedKey,
    #[error("no servers configured or available")]
    NoServers,
    #[error("connection error: {0}")]
    Connection(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("client error: {0}")]
    Client(String),
}

impl CacheError {
    pub fn is_cache_miss(&self) -> bool {
        matches!(self, CacheError::CacheMiss)
    }
}
