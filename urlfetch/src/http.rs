use std::thread;

use anyhow::bail;
use anyhow::Error;
use reqwest::blocking::Client;
use urlfetch_core::Transport;
use urlfetch_core::TransportCallback;
use urlfetch_core::TransportReply;
use urlfetch_core::Url;

/// `Transport` over plain HTTP GET. Each request runs on its own
/// short-lived thread; the client itself is shared.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<HttpTransport, Error> {
        Ok(HttpTransport {
            client: Client::builder().build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn request(&self, locator: Url, done: TransportCallback) {
        let client = self.client.clone();
        thread::spawn(move || {
            done(match get(&client, locator) {
                Ok(body) => TransportReply::payload(body),
                Err(cause) => TransportReply::error(cause),
            });
        });
    }
}

fn get(client: &Client, locator: Url) -> Result<Vec<u8>, Error> {
    let resp = client.get(locator).send()?;

    if !resp.status().is_success() {
        bail!("request failed: {}", resp.status());
    }

    Ok(resp.bytes()?.to_vec())
}
