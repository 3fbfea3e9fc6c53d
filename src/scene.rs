//! Scenes as reported by `GET /scenes`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, TimestampSeconds};

use crate::state::State;

/// A named, ordered collection of light states that can be activated together.
///
/// The live API sends `created_at`/`updated_at` as Unix seconds; RFC 3339
/// strings are accepted too.
#[serde_with::serde_as]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Scene {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub account: HashMap<String, String>,
    #[serde_as(as = "PickFirst<(TimestampSeconds<i64>, DisplayFromStr)>")]
    pub created_at: DateTime<Utc>,
    #[serde_as(as = "PickFirst<(TimestampSeconds<i64>, DisplayFromStr)>")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub states: Vec<State>,
}

impl Scene {
    /// The state this scene applies to `selector`, if any.
    pub fn state_for(&self, selector: &str) -> Option<&State> {
        self.states
            .iter()
            .find(|state| state.selector.as_deref() == Some(selector))
    }
}
