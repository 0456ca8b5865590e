use log::debug;
use log::warn;
use url::Url;

use crate::context::ContextHandle;
use crate::outcome::FetchError;
use crate::outcome::FetchOutcome;
use crate::transport::Transport;
use crate::transport::TransportReply;

pub struct Fetcher<T> {
    transport: T,
    context: ContextHandle,
}

impl<T> Fetcher<T>
where
    T: Transport,
{
    pub fn new(transport: T, context: ContextHandle) -> Fetcher<T> {
        Fetcher { transport, context }
    }

    /// `on_complete` runs exactly once per call, on the context thread,
    /// in every branch.
    pub fn fetch<F>(&self, identifier: &str, on_complete: F)
    where
        F: FnOnce(FetchOutcome) + Send + 'static,
    {
        let locator = match Url::parse(identifier) {
            Ok(locator) => locator,
            Err(_) => {
                // never touch the transport for an identifier we can't parse
                self.context
                    .dispatch(move || on_complete(Err(FetchError::BadIdentifier)));
                return;
            }
        };

        let context = self.context.clone();
        self.transport.request(
            locator,
            Box::new(move |reply| {
                let outcome = resolve(reply);
                context.dispatch(move || on_complete(outcome));
            }),
        );
    }
}

fn resolve(reply: TransportReply) -> FetchOutcome {
    // an error wins even when the transport also produced a payload
    if let Some(cause) = reply.error {
        // the category is the contract; the detail only goes to the logs
        debug!("transport error: {:#}", cause);
        return Err(FetchError::RequestFailed);
    }
    match reply.payload {
        Some(payload) if !payload.is_empty() => {
            Ok(String::from_utf8_lossy(&payload).into_owned())
        }
        _ => {
            warn!("transport called back with neither payload nor error");
            Err(FetchError::Unknown)
        }
    }
}
