use thiserror::Error;

/// Everything a fetch can fail with. All three are delivered through the
/// completion callback, never thrown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("identifier does not parse as a url")]
    BadIdentifier,
    #[error("request failed")]
    RequestFailed,
    #[error("transport returned neither payload nor error")]
    Unknown,
}

/// Either a decoded payload or a failure category; nothing else is
/// representable, unlike the transport's raw optional/optional reply.
pub type FetchOutcome = Result<String, FetchError>;
