use thiserror::Error;

/// Failures that stop a request before any resolver process is spawned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomain(String),

    #[error("Invalid server address: {0}")]
    InvalidServer(String),

    #[error("Resolver is not available on this system")]
    ResolverUnavailable,

    #[error("Batch contains no queries")]
    EmptyBatch,
}
