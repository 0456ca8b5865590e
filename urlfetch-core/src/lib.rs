mod context;
mod fetcher;
mod outcome;
mod transport;

pub use crate::context::ContextHandle;
pub use crate::context::ExecutionContext;
pub use crate::fetcher::Fetcher;
pub use crate::outcome::FetchError;
pub use crate::outcome::FetchOutcome;
pub use crate::transport::transport_fn;
pub use crate::transport::Transport;
pub use crate::transport::TransportCallback;
pub use crate::transport::TransportFn;
pub use crate::transport::TransportReply;

pub use url::Url;
