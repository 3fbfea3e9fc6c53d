//! HSBK color representation.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::DefaultOnNull;

/// A color as the LIFX API describes it: hue, saturation and kelvin, with an
/// optional brightness and name.
///
/// Hue is in degrees (0-360), saturation and brightness are ratios
/// (0.0-1.0). None of the channels are checked locally; the API reports
/// out-of-range values back as errors.
///
/// `/color` answers with `null` for channels a color string doesn't pin down;
/// those decode to `0.0`.
///
/// # Examples
///
/// ```
/// use filament::Color;
///
/// let color = Color::new(240.0, 1.0, 4000.0);
/// assert_eq!(color.to_string(), "hue:240 saturation:1 kelvin:4000");
/// ```
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Color {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub hue: f64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub saturation: f64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub kelvin: f64,
    #[serde(default)]
    pub brightness: Option<f64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Color {
    pub fn new(hue: f64, saturation: f64, kelvin: f64) -> Self {
        Color {
            hue,
            saturation,
            kelvin,
            ..Default::default()
        }
    }

    pub fn with_brightness(mut self, brightness: f64) -> Self {
        self.brightness = Some(brightness);
        self
    }
}

/// Renders the color in the API's color-string syntax, usable anywhere a
/// request takes a `color` string.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hue:{} saturation:{} kelvin:{}",
            self.hue, self.saturation, self.kelvin
        )?;
        if let Some(brightness) = self.brightness {
            write!(f, " brightness:{}", brightness)?;
        }
        Ok(())
    }
}

/// A color as it appears inside a state: either a color string
/// (`"red"`, `"#ff0000"`, `"kelvin:3500 brightness:0.5"`) or an HSBK object.
///
/// Scenes come back with objects; requests generally send strings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorValue {
    Text(String),
    Hsbk(Color),
}

impl From<&str> for ColorValue {
    fn from(s: &str) -> Self {
        ColorValue::Text(s.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(s: String) -> Self {
        ColorValue::Text(s)
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        ColorValue::Hsbk(color)
    }
}
