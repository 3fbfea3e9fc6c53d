/// All error types that can occur when talking to the LIFX HTTP API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The access token handed to the client was empty.
    #[error("invalid credential: access token can't be empty")]
    InvalidCredential,

    /// A request was attempted without a token or without a URL.
    #[error("missing credential or endpoint; a valid access token and URL are required")]
    MissingCredentialOrEndpoint,

    /// The configured base endpoint is not a usable absolute URL.
    #[error("invalid endpoint {0:?}")]
    InvalidEndpoint(String),

    /// Failed to serialize a request payload to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize a response body.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// The underlying HTTP client couldn't be configured (for example a user
    /// agent that isn't a valid header value).
    #[error("failed to build http client: {0}")]
    HttpClient(reqwest::Error),

    /// The request never produced a readable response (connection, TLS or body read failure).
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status outside 200-207.
    ///
    /// The raw body is kept so per-device results can still be inspected.
    #[error("received a {status} status code. error: {}", String::from_utf8_lossy(.body))]
    Api { status: u16, body: Vec<u8> },
}

impl Error {
    /// Create a new API error from a status code and the raw response body.
    pub fn api(status: u16, body: Vec<u8>) -> Self {
        Error::Api { status, body }
    }

    /// The raw response body carried by an [`Error::Api`].
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Error::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The HTTP status carried by an [`Error::Api`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The API answered with a non-success status.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// A response body couldn't be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::JsonLoad(_))
    }

    /// The request failed on the wire, after leaving the process.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Errors raised before any request leaves the process.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidCredential
                | Error::MissingCredentialOrEndpoint
                | Error::InvalidEndpoint(_)
                | Error::HttpClient(_)
        )
    }
}

/// Compares by message. Test builds only.
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_body() {
        let err = Error::api(500, br#"{"error":"boom"}"#.to_vec());
        assert!(err.is_api());
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.body(), Some(&br#"{"error":"boom"}"#[..]));
        assert_eq!(
            err.to_string(),
            r#"received a 500 status code. error: {"error":"boom"}"#
        );
    }

    #[test]
    fn test_classification() {
        assert!(Error::InvalidCredential.is_configuration());
        assert!(Error::MissingCredentialOrEndpoint.is_configuration());
        assert!(!Error::api(404, Vec::new()).is_configuration());

        let decode = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = Error::JsonLoad(decode);
        assert!(err.is_decode());
        assert!(!err.is_api());
        assert_eq!(err.body(), None);
    }

    #[test]
    fn test_partial_eq_by_message() {
        assert_eq!(Error::InvalidCredential, Error::InvalidCredential);
        assert_ne!(Error::InvalidCredential, Error::MissingCredentialOrEndpoint);
    }
}
