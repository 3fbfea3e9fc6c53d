//! Request URL construction.
//!
//! Every resource the client can reach is a variant of [`Endpoint`], carrying
//! exactly the arguments its path needs, so a malformed path can't be built.

use reqwest::Url;

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Base URL of the current LIFX HTTP API.
pub const DEFAULT_ENDPOINT: &str = "https://api.lifx.com/v1";

/// Selector matching every light on the account.
pub const ALL: &str = "all";

/// Returns `selector`, or `"all"` when it is empty.
///
/// # Examples
///
/// ```
/// use filament::endpoint::selector_or_all;
///
/// assert_eq!(selector_or_all(""), "all");
/// assert_eq!(selector_or_all("label:Kitchen"), "label:Kitchen");
/// ```
pub fn selector_or_all(selector: &str) -> &str {
    if selector.is_empty() { ALL } else { selector }
}

/// A resource of the LIFX HTTP API.
///
/// Variants that act on a set of lights take a selector and fall back to
/// `"all"` when it is empty. Scene and color arguments are used verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `GET /lights/{selector}`
    Lights(&'a str),
    /// `GET /scenes`
    Scenes,
    /// `GET /color?string={color}`
    ValidateColor(&'a str),
    /// `PUT /lights/{selector}/state`
    SetState(&'a str),
    /// `PUT /lights/states`
    SetStates,
    /// `PUT /scenes/scene_id:{uuid}/activate`
    ActivateScene(&'a str),
    /// `POST /lights/{selector}/cycle`
    Cycle(&'a str),
    /// `POST /lights/{selector}/effects/pulse`
    Pulse(&'a str),
    /// `POST /lights/{selector}/effects/breathe`
    Breathe(&'a str),
    /// `POST /lights/{selector}/toggle`
    Toggle(&'a str),
    /// `POST /lights/{selector}/state/delta`
    StateDelta(&'a str),
}

impl Endpoint<'_> {
    /// Path segments below the base URL, selector defaulting applied.
    pub fn segments(&self) -> Vec<String> {
        let lights = |selector: &str, rest: &[&str]| {
            let mut segments = vec!["lights".to_string(), selector_or_all(selector).to_string()];
            segments.extend(rest.iter().map(|s| s.to_string()));
            segments
        };

        match *self {
            Endpoint::Lights(selector) => lights(selector, &[]),
            Endpoint::Scenes => vec!["scenes".to_string()],
            Endpoint::ValidateColor(_) => vec!["color".to_string()],
            Endpoint::SetState(selector) => lights(selector, &["state"]),
            Endpoint::SetStates => vec!["lights".to_string(), "states".to_string()],
            Endpoint::ActivateScene(uuid) => vec![
                "scenes".to_string(),
                format!("scene_id:{}", uuid),
                "activate".to_string(),
            ],
            Endpoint::Cycle(selector) => lights(selector, &["cycle"]),
            Endpoint::Pulse(selector) => lights(selector, &["effects", "pulse"]),
            Endpoint::Breathe(selector) => lights(selector, &["effects", "breathe"]),
            Endpoint::Toggle(selector) => lights(selector, &["toggle"]),
            Endpoint::StateDelta(selector) => lights(selector, &["state", "delta"]),
        }
    }

    /// Query parameters, if the resource takes any.
    pub fn query(&self) -> Option<(&'static str, &str)> {
        match *self {
            Endpoint::ValidateColor(color) => Some(("string", color)),
            _ => None,
        }
    }

    /// The fully-qualified request URL below `base`.
    ///
    /// Segments and query values are percent-encoded.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidEndpoint(base.to_string()))?
            .pop_if_empty()
            .extend(self.segments());

        if let Some((key, value)) = self.query() {
            url.query_pairs_mut().append_pair(key, value);
        }

        Ok(url)
    }
}

/// Parse and check a base endpoint for use by a client.
pub(crate) fn parse_base(endpoint: &str) -> Result<Url> {
    if endpoint.is_empty() {
        return Err(Error::MissingCredentialOrEndpoint);
    }

    let url = Url::parse(endpoint).map_err(|_| Error::InvalidEndpoint(endpoint.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidEndpoint(endpoint.to_string()));
    }

    Ok(url)
}
