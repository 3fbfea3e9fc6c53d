//! Typed request bodies for the bulk, scene, cycle, effect and toggle calls.
//!
//! Every API call accepts any `Serialize` payload, so a `serde_json::Value`
//! works just as well; these types keep the common shapes checked.

use serde::{Deserialize, Serialize};

use crate::state::State;
use crate::types::Direction;

/// Body of [`crate::Client::set_states`]: several states at once, each with
/// its own selector.
///
/// # Examples
///
/// ```
/// use filament::{Power, State, States};
///
/// let mut kitchen = State::for_selector("label:Kitchen");
/// kitchen.power(Power::On);
///
/// let mut defaults = State::new();
/// defaults.duration(5.0);
///
/// let mut states = States::new();
/// states.push(kitchen);
/// states.defaults(defaults);
/// assert_eq!(
///     serde_json::to_string(&states).unwrap(),
///     r#"{"states":[{"selector":"label:Kitchen","power":"on"}],"defaults":{"duration":5.0}}"#
/// );
/// ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct States {
    pub(crate) states: Vec<State>,
    pub(crate) defaults: Option<State>,
    pub(crate) fast: Option<bool>,
}

impl States {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry with its own selector.
    pub fn push(&mut self, state: State) {
        self.states.push(state);
    }

    /// Values applied to every entry that doesn't set them itself.
    pub fn defaults(&mut self, defaults: State) {
        self.defaults = Some(defaults);
    }

    /// Apply without checking state or waiting for results.
    pub fn fast(&mut self, fast: bool) {
        self.fast = Some(fast);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl FromIterator<State> for States {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        States {
            states: iter.into_iter().collect(),
            ..Default::default()
        }
    }
}

/// Body of [`crate::Client::activate_scene`].
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ActivateScene {
    pub(crate) duration: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub(crate) ignore: Vec<String>,
    pub(crate) overrides: Option<State>,
    pub(crate) fast: Option<bool>,
}

impl ActivateScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition time in seconds.
    pub fn duration(&mut self, seconds: f64) {
        self.duration = Some(seconds);
    }

    /// Leave one state property (`"power"`, `"brightness"`, ...) untouched.
    pub fn ignore(&mut self, property: &str) {
        self.ignore.push(property.to_string());
    }

    /// Values that replace the scene's own for every light it touches.
    pub fn overrides(&mut self, overrides: State) {
        self.overrides = Some(overrides);
    }

    /// Apply without checking state or waiting for results.
    pub fn fast(&mut self, fast: bool) {
        self.fast = Some(fast);
    }
}

/// Body of [`crate::Client::cycle`]: the lights move to the state after the
/// one they currently match.
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Cycle {
    pub(crate) states: Vec<State>,
    pub(crate) defaults: Option<State>,
    pub(crate) direction: Option<Direction>,
}

impl Cycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the next state of the cycle.
    pub fn push(&mut self, state: State) {
        self.states.push(state);
    }

    /// Values applied to every state that doesn't set them itself.
    pub fn defaults(&mut self, defaults: State) {
        self.defaults = Some(defaults);
    }

    /// Which way to step through the states. The API defaults to forward.
    pub fn direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }
}

impl FromIterator<State> for Cycle {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Cycle {
            states: iter.into_iter().collect(),
            ..Default::default()
        }
    }
}

/// Body of the pulse and breathe effects.
///
/// `peak` only means something for breathe; pulse ignores it.
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Effect {
    pub(crate) color: Option<String>,
    pub(crate) from_color: Option<String>,
    pub(crate) period: Option<f64>,
    pub(crate) cycles: Option<f64>,
    pub(crate) persist: Option<bool>,
    pub(crate) power_on: Option<bool>,
    pub(crate) peak: Option<f64>,
}

impl Effect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color to flash or fade to.
    pub fn color(&mut self, color: &str) {
        self.color = Some(color.to_string());
    }

    /// Color to start from; defaults to the light's current color.
    pub fn from_color(&mut self, color: &str) {
        self.from_color = Some(color.to_string());
    }

    /// Seconds per cycle.
    pub fn period(&mut self, seconds: f64) {
        self.period = Some(seconds);
    }

    /// Number of times to repeat; fractions end part-way through a cycle.
    pub fn cycles(&mut self, cycles: f64) {
        self.cycles = Some(cycles);
    }

    /// Keep the last color of the effect instead of restoring the original.
    pub fn persist(&mut self, persist: bool) {
        self.persist = Some(persist);
    }

    /// Turn lights on first if they are off.
    pub fn power_on(&mut self, power_on: bool) {
        self.power_on = Some(power_on);
    }

    /// Where in the period the target color is reached, between 0.0 and 1.0.
    pub fn peak(&mut self, peak: f64) {
        self.peak = Some(peak);
    }
}

/// Body of [`crate::Client::toggle_power_with`].
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Toggle {
    pub(crate) duration: Option<f64>,
}

impl Toggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition time in seconds.
    pub fn duration(&mut self, seconds: f64) {
        self.duration = Some(seconds);
    }
}
