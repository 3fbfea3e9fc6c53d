//! The async LIFX HTTP API client.

use std::fmt;
use std::time::Duration;

use log::debug;
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec;
use crate::device::Device;
use crate::endpoint::{self, DEFAULT_ENDPOINT, Endpoint};
use crate::errors::Error;
use crate::payload::Toggle;
use crate::response::Response;
use crate::scene::Scene;
use crate::types::Color;

type Result<T> = std::result::Result<T, Error>;

/// Environment variable read by [`Client::from_env`].
pub const TOKEN_ENV_VAR: &str = "LIFX_API_ACCESS_TOKEN";

/// A LIFX access token. Never empty once constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Returns `None` for an empty token.
    pub fn create(token: &str) -> Option<Self> {
        if token.is_empty() {
            None
        } else {
            Some(AccessToken(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Validate the pieces every client needs before any request is made.
pub(crate) fn credentials(token: &str, endpoint: &str) -> Result<(AccessToken, Url)> {
    let token = AccessToken::create(token).ok_or(Error::InvalidCredential)?;
    let endpoint = endpoint::parse_base(endpoint)?;
    Ok((token, endpoint))
}

pub(crate) fn default_user_agent() -> String {
    format!("filament/{}", env!("CARGO_PKG_VERSION"))
}

/// An authenticated handle on the LIFX HTTP API.
///
/// A `Client` is immutable once built. Clone it freely or share it between
/// tasks; every call is an independent request with no retries and no caching.
///
/// # Example
///
/// ```no_run
/// use filament::{Client, Power, State};
///
/// # async fn run() -> Result<(), filament::Error> {
/// let client = Client::new("c87c73a896b554367fac61f71dd3656af8d93a525a4e87df5952c6078a89d192")?;
///
/// for device in client.list_lights("").await? {
///     println!("{} is {}", device.label, device.power);
/// }
///
/// let mut state = State::new();
/// state.power(Power::On);
/// state.color("blue");
/// let response = client.set_state("label:Kitchen", &state).await?;
/// assert!(response.is_all_ok());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    token: AccessToken,
    endpoint: Url,
    http: reqwest::Client,
}

impl Client {
    /// Build a client against the public API with default settings.
    ///
    /// Fails with [`Error::InvalidCredential`] when `token` is empty.
    pub fn new(token: &str) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Start configuring a client for `token`.
    pub fn builder(token: &str) -> ClientBuilder {
        ClientBuilder::new(token)
    }

    /// Build a client from the `LIFX_API_ACCESS_TOKEN` environment variable.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(TOKEN_ENV_VAR)
    }

    /// Build a client from the named environment variable. Unset counts as empty.
    pub fn from_env_var(name: &str) -> Result<Self> {
        let token = std::env::var(name).unwrap_or_default();
        Self::new(&token)
    }

    /// The base URL every request is resolved against.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub(crate) fn token(&self) -> &str {
        self.token.as_str()
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The full URL `endpoint` resolves to for this client.
    pub fn url(&self, endpoint: Endpoint<'_>) -> Result<Url> {
        endpoint.url(&self.endpoint)
    }

    /// Lists the lights matching `selector` (`""` means all of them).
    pub async fn list_lights(&self, selector: &str) -> Result<Vec<Device>> {
        self.get_json(Endpoint::Lights(selector)).await
    }

    /// Lists the scenes saved on the account.
    pub async fn list_scenes(&self) -> Result<Vec<Scene>> {
        self.get_json(Endpoint::Scenes).await
    }

    /// Asks the API to parse a color string such as `"red"` or
    /// `"hue:120 saturation:1.0"`.
    pub async fn validate_color(&self, color: &str) -> Result<Color> {
        self.get_json(Endpoint::ValidateColor(color)).await
    }

    /// Sets the state of the lights matching `selector`.
    pub async fn set_state<P: Serialize + ?Sized>(
        &self,
        selector: &str,
        payload: &P,
    ) -> Result<Response> {
        self.put_json(Endpoint::SetState(selector), payload).await
    }

    /// Sets several states at once, each entry carrying its own selector.
    pub async fn set_states<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Response> {
        self.put_json(Endpoint::SetStates, payload).await
    }

    /// Activates the scene with the given uuid.
    pub async fn activate_scene<P: Serialize + ?Sized>(
        &self,
        scene_uuid: &str,
        payload: &P,
    ) -> Result<Response> {
        self.put_json(Endpoint::ActivateScene(scene_uuid), payload).await
    }

    /// Moves the lights to the next (or previous) state of a list.
    pub async fn cycle<P: Serialize + ?Sized>(
        &self,
        selector: &str,
        payload: &P,
    ) -> Result<Response> {
        self.post_json(Endpoint::Cycle(selector), payload).await
    }

    /// Quickly flashes between the given colors.
    pub async fn pulse_effect<P: Serialize + ?Sized>(
        &self,
        selector: &str,
        payload: &P,
    ) -> Result<Response> {
        self.post_json(Endpoint::Pulse(selector), payload).await
    }

    /// Slowly fades between the given colors.
    pub async fn breathe_effect<P: Serialize + ?Sized>(
        &self,
        selector: &str,
        payload: &P,
    ) -> Result<Response> {
        self.post_json(Endpoint::Breathe(selector), payload).await
    }

    /// Turns the lights off if any of them are on, or on if they are all off.
    pub async fn toggle_power(&self, selector: &str) -> Result<Response> {
        self.toggle_power_with(selector, &Toggle::new()).await
    }

    /// Like [`Client::toggle_power`] with a transition duration.
    pub async fn toggle_power_with(&self, selector: &str, toggle: &Toggle) -> Result<Response> {
        self.post_json(Endpoint::Toggle(selector), toggle).await
    }

    /// Changes the state of the lights by the given amounts.
    pub async fn state_delta<P: Serialize + ?Sized>(
        &self,
        selector: &str,
        payload: &P,
    ) -> Result<Response> {
        self.post_json(Endpoint::StateDelta(selector), payload).await
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T> {
        let url = self.url(endpoint)?;
        let body = self.get(url.as_str()).await?;
        codec::decode(&body)
    }

    async fn put_json<P, T>(&self, endpoint: Endpoint<'_>, payload: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint)?;
        let body = self.put(url.as_str(), payload).await?;
        codec::decode(&body)
    }

    async fn post_json<P, T>(&self, endpoint: Endpoint<'_>, payload: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint)?;
        let body = self.post(url.as_str(), payload).await?;
        codec::decode(&body)
    }
}

/// Configures a [`Client`].
///
/// Timeout and user agent are handed straight to the underlying `reqwest`
/// client; pass your own with [`ClientBuilder::http_client`] for anything else.
pub struct ClientBuilder {
    token: String,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// A builder for the public API endpoint with no timeout.
    pub fn new(token: &str) -> Self {
        ClientBuilder {
            token: token.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            user_agent: None,
            http: None,
        }
    }

    /// Base URL requests are made against. Defaults to [`DEFAULT_ENDPOINT`].
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Total time allowed for each request, connection included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the default `filament/<version>` user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured `reqwest` client. Timeout and user agent set on
    /// this builder are then ignored.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Validates the token and endpoint and builds the client.
    ///
    /// Fails with [`Error::InvalidCredential`] for an empty token,
    /// [`Error::InvalidEndpoint`] for an unusable base URL and
    /// [`Error::HttpClient`] when the `reqwest` client can't be configured.
    pub fn build(self) -> Result<Client> {
        let (token, endpoint) = credentials(&self.token, &self.endpoint)?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder()
                    .user_agent(self.user_agent.unwrap_or_else(default_user_agent));
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(Error::HttpClient)?
            }
        };

        debug!("LIFX client ready for {}", endpoint);
        Ok(Client {
            token,
            endpoint,
            http,
        })
    }
}
