use anyhow::Error;
use url::Url;

/// The raw shape an external transport hands back: optionally some bytes,
/// optionally an error, with nothing stopping it from setting both or
/// neither. The fetcher's job is to collapse this into a `FetchOutcome`.
pub struct TransportReply {
    pub payload: Option<Vec<u8>>,
    pub error: Option<Error>,
}

impl TransportReply {
    pub fn payload<B: Into<Vec<u8>>>(bytes: B) -> TransportReply {
        TransportReply {
            payload: Some(bytes.into()),
            error: None,
        }
    }

    pub fn error<E: Into<Error>>(cause: E) -> TransportReply {
        TransportReply {
            payload: None,
            error: Some(cause.into()),
        }
    }

    pub fn empty() -> TransportReply {
        TransportReply {
            payload: None,
            error: None,
        }
    }
}

pub type TransportCallback = Box<dyn FnOnce(TransportReply) + Send>;

/// The injected collaborator that actually retrieves bytes. `request` must
/// not block; `done` is invoked exactly once, later, from any thread.
pub trait Transport {
    fn request(&self, locator: Url, done: TransportCallback);
}

pub struct TransportFn<F> {
    inner: F,
}

/// Wrap a closure as a `Transport`, mostly for tests and one-offs.
pub fn transport_fn<F>(inner: F) -> TransportFn<F>
where
    F: Fn(Url, TransportCallback),
{
    TransportFn { inner }
}

impl<F> Transport for TransportFn<F>
where
    F: Fn(Url, TransportCallback),
{
    fn request(&self, locator: Url, done: TransportCallback) {
        (self.inner)(locator, done)
    }
}
