//! Results of mutating calls.

use serde::{Deserialize, Serialize};

/// The outcome of a mutating call across every light its selector matched.
///
/// A `207 Multi-Status` answer still decodes into a `Response`; check each
/// [`OperationResult`] to see which lights actually applied the change.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Response {
    #[serde(default)]
    pub results: Vec<OperationResult>,
}

impl Response {
    /// True when every light reported `ok`.
    pub fn is_all_ok(&self) -> bool {
        self.results.iter().all(OperationResult::is_ok)
    }

    /// Lights that did not report `ok` (typically `timed_out` or `offline`).
    pub fn failed(&self) -> impl Iterator<Item = &OperationResult> + '_ {
        self.results.iter().filter(|result| !result.is_ok())
    }
}

/// The result for a single light.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OperationResult {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub label: String,
}

impl OperationResult {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
