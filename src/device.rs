//! Lights as reported by `GET /lights/{selector}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Color, Power};

/// A single LIFX light source and its last known state.
///
/// Fields the API leaves out decode to their zero value, so one sparse light
/// doesn't fail a whole listing.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Device {
    pub id: String,
    pub uuid: String,
    pub label: String,
    pub connected: bool,
    pub power: Power,
    /// Ratio between 0.0 and 1.0.
    pub brightness: f64,
    pub color: Color,
    pub last_seen: Option<DateTime<Utc>>,
    pub seconds_since_seen: f64,
    pub group: Group,
    pub location: Location,
    pub product: Product,
}

impl Device {
    pub fn is_on(&self) -> bool {
        self.power.is_on()
    }
}

/// The group a light belongs to.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Group {
    pub id: String,
    pub name: String,
}

/// The location a light belongs to.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Location {
    pub id: String,
    pub name: String,
}

/// The kind of LIFX product a light is.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Product {
    pub name: String,
    pub identifier: String,
    pub company: String,
    pub capabilities: Capabilities,
}

/// Feature flags for a product.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Capabilities {
    #[serde(default)]
    pub has_color: bool,
    #[serde(default)]
    pub has_variable_color_temp: bool,
    #[serde(default)]
    pub has_ir: bool,
    #[serde(default)]
    pub has_chain: bool,
    #[serde(default)]
    pub has_multizone: bool,
    #[serde(default)]
    pub min_kelvin: f64,
    #[serde(default)]
    pub max_kelvin: f64,
}

impl Capabilities {
    /// Whether `kelvin` lies inside the product's supported white range.
    pub fn supports_kelvin(&self, kelvin: f64) -> bool {
        (self.min_kelvin..=self.max_kelvin).contains(&kelvin)
    }
}
