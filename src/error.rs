use thiserror::Error;

/// Errors raised by header, request and response operations.
///
/// Guard rejections other than [`Error::GuardViolation`] are silent and
/// never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A mutation was attempted on an immutable header collection.
    #[error("headers are immutable")]
    GuardViolation,

    #[error("body already read")]
    BodyAlreadyUsed,

    #[error("body not allowed for {0} requests")]
    BodyNotAllowed(String),

    #[error("invalid redirect status code {0}")]
    InvalidRedirectStatus(u16),
}

pub type Result<T> = std::result::Result<T, Error>;
