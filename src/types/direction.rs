//! Cycle direction.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Which way a cycle walks through its list of states.
#[derive(
    Default,
    Debug,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}
