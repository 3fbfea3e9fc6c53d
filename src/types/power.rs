//! Power state for light control.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Power state reported by, or requested from, a light.
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
pub enum Power {
    /// The light is emitting
    On,
    /// The light is dark
    #[default]
    Off,
}

impl Power {
    pub fn is_on(&self) -> bool {
        *self == Power::On
    }
}

impl From<bool> for Power {
    fn from(on: bool) -> Self {
        if on { Power::On } else { Power::Off }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_power_strings() {
        assert_eq!(Power::On.to_string(), "on");
        assert_eq!(Power::Off.as_ref(), "off");
        assert_eq!(Power::from_str("on").unwrap(), Power::On);
        assert!(Power::from_str("dim").is_err());
    }

    #[test]
    fn test_power_json() {
        assert_eq!(serde_json::to_string(&Power::Off).unwrap(), r#""off""#);
        let power: Power = serde_json::from_str(r#""on""#).unwrap();
        assert!(power.is_on());
        assert_eq!(Power::from(false), Power::Off);
        assert_eq!(Power::default(), Power::Off);
    }
}
