//! Authenticated HTTP round trips and status classification.

use log::{debug, warn};
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::client::Client;
use crate::codec;
use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Highest status code still treated as success (207 Multi-Status).
pub const MAX_SUCCESS_STATUS: u16 = 207;

impl Client {
    /// Makes a GET request and returns the raw response body.
    pub async fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.send(Method::GET, url, None).await
    }

    /// Makes a PUT request with `payload` as the JSON body.
    pub async fn put<P: Serialize + ?Sized>(&self, url: &str, payload: &P) -> Result<Vec<u8>> {
        let body = codec::encode(payload)?;
        self.send(Method::PUT, url, Some(body)).await
    }

    /// Makes a POST request with `payload` as the JSON body.
    pub async fn post<P: Serialize + ?Sized>(&self, url: &str, payload: &P) -> Result<Vec<u8>> {
        let body = codec::encode(payload)?;
        self.send(Method::POST, url, Some(body)).await
    }

    async fn send(&self, method: Method, url: &str, body: Option<Vec<u8>>) -> Result<Vec<u8>> {
        ensure_ready(self.token(), url)?;

        debug!("{} {}", method, url);
        let mut request = self
            .http()
            .request(method.clone(), url)
            .bearer_auth(self.token());
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!("{} {} -> {}", method, url, status);
        classify(status, body.to_vec())
    }
}

/// Refuses to go to the network without both a token and a URL.
pub(crate) fn ensure_ready(token: &str, url: &str) -> Result<()> {
    if token.is_empty() || url.is_empty() {
        return Err(Error::MissingCredentialOrEndpoint);
    }
    Ok(())
}

/// Any status outside 200-207 is a failure; the body travels with the error.
pub fn classify(status: u16, body: Vec<u8>) -> Result<Vec<u8>> {
    if (200..=MAX_SUCCESS_STATUS).contains(&status) {
        Ok(body)
    } else {
        warn!("LIFX API answered with status {}", status);
        Err(Error::api(status, body))
    }
}
