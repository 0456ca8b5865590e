mod http;

pub use crate::http::HttpTransport;
