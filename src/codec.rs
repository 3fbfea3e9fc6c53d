//! JSON encoding of request bodies and decoding of response bodies.

use serde::{Serialize, de::DeserializeOwned};

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Serialize any payload; the remote API decides which fields it accepts.
pub fn encode<P: Serialize + ?Sized>(payload: &P) -> Result<Vec<u8>> {
    serde_json::to_vec(payload).map_err(Error::JsonDump)
}

/// Decode a response body into `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(Error::JsonLoad)
}
