//! A blocking LIFX client.
//!
//! Enable with the `blocking` feature:
//!
//! ```toml
//! [dependencies]
//! filament = { version = "0.1", features = ["blocking"] }
//! ```
//!
//! The blocking [`Client`] has the same operations as the async
//! [`crate::Client`], returns the same types and fails in the same ways. It
//! must not be used from inside an async runtime.

use std::time::Duration;

use log::debug;
use reqwest::Method;
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::{AccessToken, TOKEN_ENV_VAR, credentials, default_user_agent};
use crate::codec;
use crate::device::Device;
use crate::endpoint::{DEFAULT_ENDPOINT, Endpoint};
use crate::errors::Error;
use crate::payload::Toggle;
use crate::response::Response;
use crate::scene::Scene;
use crate::transport::{classify, ensure_ready};
use crate::types::Color;

type Result<T> = std::result::Result<T, Error>;

/// Blocking counterpart of [`crate::Client`].
///
/// # Example
///
/// ```no_run
/// use filament::blocking::Client;
///
/// let client = Client::from_env()?;
/// let response = client.toggle_power("group:Bedroom")?;
/// println!("{} light(s) toggled", response.results.len());
/// # Ok::<(), filament::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    token: AccessToken,
    endpoint: Url,
    http: reqwest::blocking::Client,
}

impl Client {
    /// Build a client against the public API with default settings.
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

    /// The full URL `endpoint` resolves to for this client.
    pub fn url(&self, endpoint: Endpoint<'_>) -> Result<Url> {
        endpoint.url(&self.endpoint)
    }

    /// Lists the lights matching `selector` (`""` means all of them).
    pub fn list_lights(&self, selector: &str) -> Result<Vec<Device>> {
        self.get_json(Endpoint::Lights(selector))
    }

    /// Lists the scenes saved on the account.
    pub fn list_scenes(&self) -> Result<Vec<Scene>> {
        self.get_json(Endpoint::Scenes)
    }

    /// Asks the API to parse a color string.
    pub fn validate_color(&self, color: &str) -> Result<Color> {
        self.get_json(Endpoint::ValidateColor(color))
    }

    /// Sets the state of the lights matching `selector`.
    pub fn set_state<P: Serialize + ?Sized>(
        &self,
        selector: &str,
        payload: &P,
    ) -> Result<Response> {
        self.put_json(Endpoint::SetState(selector), payload)
    }

    /// Sets several states at once, each entry carrying its own selector.
    pub fn set_states<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Response> {
        self.put_json(Endpoint::SetStates, payload)
    }

    /// Activates the scene with the given uuid.
    pub fn activate_scene<P: Serialize + ?Sized>(
        &self,
        scene_uuid: &str,
        payload: &P,
    ) -> Result<Response> {
        self.put_json(Endpoint::ActivateScene(scene_uuid), payload)
    }

    /// Moves the lights to the next (or previous) state of a list.
    pub fn cycle<P: Serialize + ?Sized>(&self, selector: &str, payload: &P) -> Result<Response> {
        self.post_json(Endpoint::Cycle(selector), payload)
    }

    /// Quickly flashes between the given colors.
    pub fn pulse_effect<P: Serialize + ?Sized>(
        &self,
        selector: &str,
        payload: &P,
    ) -> Result<Response> {
        self.post_json(Endpoint::Pulse(selector), payload)
    }

    /// Slowly fades between the given colors.
    pub fn breathe_effect<P: Serialize + ?Sized>(
        &self,
        selector: &str,
        payload: &P,
    ) -> Result<Response> {
        self.post_json(Endpoint::Breathe(selector), payload)
    }

    /// Turns the lights off if any of them are on, or on if they are all off.
    pub fn toggle_power(&self, selector: &str) -> Result<Response> {
        self.toggle_power_with(selector, &Toggle::new())
    }

    /// Like [`Client::toggle_power`] with a transition duration.
    pub fn toggle_power_with(&self, selector: &str, toggle: &Toggle) -> Result<Response> {
        self.post_json(Endpoint::Toggle(selector), toggle)
    }

    /// Changes the state of the lights by the given amounts.
    pub fn state_delta<P: Serialize + ?Sized>(
        &self,
        selector: &str,
        payload: &P,
    ) -> Result<Response> {
        self.post_json(Endpoint::StateDelta(selector), payload)
    }

    /// Makes a GET request and returns the raw response body.
    pub fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.send(Method::GET, url, None)
    }

    /// Makes a PUT request with `payload` as the JSON body.
    pub fn put<P: Serialize + ?Sized>(&self, url: &str, payload: &P) -> Result<Vec<u8>> {
        let body = codec::encode(payload)?;
        self.send(Method::PUT, url, Some(body))
    }

    /// Makes a POST request with `payload` as the JSON body.
    pub fn post<P: Serialize + ?Sized>(&self, url: &str, payload: &P) -> Result<Vec<u8>> {
        let body = codec::encode(payload)?;
        self.send(Method::POST, url, Some(body))
    }

    fn send(&self, method: Method, url: &str, body: Option<Vec<u8>>) -> Result<Vec<u8>> {
        ensure_ready(self.token.as_str(), url)?;

        debug!("{} {}", method, url);
        let mut request = self
            .http
            .request(method.clone(), url)
            .bearer_auth(self.token.as_str());
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;

        debug!("{} {} -> {}", method, url, status);
        classify(status, body.to_vec())
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T> {
        let url = self.url(endpoint)?;
        codec::decode(&self.get(url.as_str())?)
    }

    fn put_json<P, T>(&self, endpoint: Endpoint<'_>, payload: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint)?;
        codec::decode(&self.put(url.as_str(), payload)?)
    }

    fn post_json<P, T>(&self, endpoint: Endpoint<'_>, payload: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint)?;
        codec::decode(&self.post(url.as_str(), payload)?)
    }
}

/// Configures a blocking [`Client`].
pub struct ClientBuilder {
    token: String,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http: Option<reqwest::blocking::Client>,
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

    /// Use a preconfigured blocking `reqwest` client.
    pub fn http_client(mut self, http: reqwest::blocking::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Validates the token and endpoint and builds the client.
    pub fn build(self) -> Result<Client> {
        let (token, endpoint) = credentials(&self.token, &self.endpoint)?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::blocking::Client::builder()
                    .user_agent(self.user_agent.unwrap_or_else(default_user_agent));
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(Error::HttpClient)?
            }
        };

        Ok(Client {
            token,
            endpoint,
            http,
        })
    }
}
