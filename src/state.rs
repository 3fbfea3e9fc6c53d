//! Light states: scene steps, bulk entries and set-state bodies.

use serde::{Deserialize, Serialize};

use crate::types::{ColorValue, Power};

/// A target state for one selector.
///
/// The same shape shows up in several places: as a step of a [`crate::Scene`],
/// as an entry of a bulk [`crate::States`] request, as the body of
/// [`crate::Client::set_state`], and as a step of a [`crate::Cycle`]. Fields
/// left unset are omitted from the request and the light keeps its current
/// value.
///
/// # Examples
///
/// ```
/// use filament::{Power, State};
///
/// let mut state = State::new();
/// state.power(Power::On);
/// state.color("blue saturation:0.5");
/// state.duration(2.0);
/// assert_eq!(
///     serde_json::to_string(&state).unwrap(),
///     r#"{"power":"on","color":"blue saturation:0.5","duration":2.0}"#
/// );
/// ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct State {
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub power: Option<Power>,
    #[serde(default)]
    pub color: Option<ColorValue>,
    #[serde(default)]
    pub brightness: Option<f64>,
    /// Transition time in seconds.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub infrared: Option<f64>,
    /// Skip the state check and don't wait for a result.
    #[serde(default)]
    pub fast: Option<bool>,
}

impl State {
    /// An empty state; the light keeps every current value.
    pub fn new() -> Self {
        Self::default()
    }

    /// A state targeting `selector`, for bulk and cycle requests.
    pub fn for_selector(selector: &str) -> Self {
        State {
            selector: Some(selector.to_string()),
            ..Default::default()
        }
    }

    /// Target lights for bulk and cycle requests.
    pub fn selector(&mut self, selector: &str) {
        self.selector = Some(selector.to_string());
    }

    /// Turn the lights on or off.
    pub fn power(&mut self, power: Power) {
        self.power = Some(power);
    }

    /// Set the color from a color string or an HSBK [`crate::Color`].
    pub fn color(&mut self, color: impl Into<ColorValue>) {
        self.color = Some(color.into());
    }

    /// Brightness between 0.0 and 1.0, overriding the color's own.
    pub fn brightness(&mut self, brightness: f64) {
        self.brightness = Some(brightness);
    }

    /// Transition time in seconds.
    pub fn duration(&mut self, seconds: f64) {
        self.duration = Some(seconds);
    }

    /// Infrared channel level between 0.0 and 1.0, for lights that have one.
    pub fn infrared(&mut self, infrared: f64) {
        self.infrared = Some(infrared);
    }

    /// Apply without checking state or waiting for results.
    pub fn fast(&mut self, fast: bool) {
        self.fast = Some(fast);
    }

    /// Check if this state sets at least one attribute besides the selector.
    pub fn is_empty(&self) -> bool {
        self.power.is_none()
            && self.color.is_none()
            && self.brightness.is_none()
            && self.duration.is_none()
            && self.infrared.is_none()
            && self.fast.is_none()
    }
}

/// Relative change applied on top of the current state by
/// [`crate::Client::state_delta`].
///
/// # Examples
///
/// ```
/// use filament::StateDelta;
///
/// let mut delta = StateDelta::new();
/// delta.brightness(-0.1);
/// delta.hue(30.0);
/// assert_eq!(
///     serde_json::to_string(&delta).unwrap(),
///     r#"{"hue":30.0,"brightness":-0.1}"#
/// );
/// ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StateDelta {
    pub(crate) power: Option<Power>,
    pub(crate) duration: Option<f64>,
    pub(crate) infrared: Option<f64>,
    pub(crate) hue: Option<f64>,
    pub(crate) saturation: Option<f64>,
    pub(crate) brightness: Option<f64>,
    pub(crate) kelvin: Option<i32>,
    pub(crate) fast: Option<bool>,
}

impl StateDelta {
    /// A delta that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute power state to end up in.
    pub fn power(&mut self, power: Power) {
        self.power = Some(power);
    }

    /// Transition time in seconds.
    pub fn duration(&mut self, seconds: f64) {
        self.duration = Some(seconds);
    }

    pub fn infrared(&mut self, infrared: f64) {
        self.infrared = Some(infrared);
    }

    /// Rotate the hue by this many degrees.
    pub fn hue(&mut self, degrees: f64) {
        self.hue = Some(degrees);
    }

    /// Add this much to the saturation ratio.
    pub fn saturation(&mut self, saturation: f64) {
        self.saturation = Some(saturation);
    }

    /// Add this much to the brightness ratio; negative dims.
    pub fn brightness(&mut self, brightness: f64) {
        self.brightness = Some(brightness);
    }

    /// Shift the white temperature by this many kelvin.
    pub fn kelvin(&mut self, kelvin: i32) {
        self.kelvin = Some(kelvin);
    }

    pub fn fast(&mut self, fast: bool) {
        self.fast = Some(fast);
    }
}
