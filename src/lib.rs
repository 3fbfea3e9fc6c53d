//! # filament
//!
//! A Rust client library for the LIFX HTTP API.
//!
//! This crate lists the lights and scenes on a LIFX account, validates color
//! strings, and changes light state (power, color, brightness, effects)
//! through authenticated requests to `https://api.lifx.com/v1`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use filament::{Client, Effect, Power, State};
//!
//! async fn control_lights() -> Result<(), filament::Error> {
//!     // Create a client with a personal access token
//!     let client = Client::new("your-access-token")?;
//!
//!     // Turn the kitchen blue over two seconds
//!     let mut state = State::new();
//!     state.power(Power::On);
//!     state.color("blue");
//!     state.duration(2.0);
//!     client.set_state("label:Kitchen", &state).await?;
//!
//!     // Flash every light red three times
//!     let mut pulse = Effect::new();
//!     pulse.color("red");
//!     pulse.cycles(3.0);
//!     client.pulse_effect("", &pulse).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Lights and scenes**: [`Client::list_lights`] and [`Client::list_scenes`]
//!   decode into [`Device`] and [`Scene`]
//! - **State changes**: [`Client::set_state`], [`Client::set_states`],
//!   [`Client::state_delta`] and [`Client::toggle_power`]
//! - **Effects**: [`Client::pulse_effect`], [`Client::breathe_effect`] and
//!   [`Client::cycle`]
//! - **Scenes**: [`Client::activate_scene`]
//! - **Colors**: [`Client::validate_color`]
//!
//! Every call that acts on a set of lights takes a selector (`"all"`,
//! `"label:Kitchen"`, `"group_id:..."`); an empty selector means `"all"`.
//!
//! Request bodies can be the typed payloads of this crate ([`State`],
//! [`States`], [`StateDelta`], [`Cycle`], [`Effect`], [`ActivateScene`],
//! [`Toggle`]) or anything else that implements `Serialize`.
//!
//! ## Errors
//!
//! A status outside 200-207 becomes [`Error::Api`], which keeps the raw body
//! so per-light results can still be read. Network failures are
//! [`Error::Http`] and undecodable bodies are [`Error::JsonLoad`]. Nothing is
//! retried.
//!
//! ## Feature Flags
//!
//! - `blocking`: adds [`blocking::Client`], a synchronous client with the same
//!   operations

#[cfg(feature = "blocking")]
pub mod blocking;
mod client;
pub mod codec;
mod device;
pub mod endpoint;
mod errors;
mod payload;
mod response;
mod scene;
mod state;
mod transport;
mod types;

// Re-export public API
pub use client::{AccessToken, Client, ClientBuilder, TOKEN_ENV_VAR};
pub use device::{Capabilities, Device, Group, Location, Product};
pub use endpoint::{DEFAULT_ENDPOINT, Endpoint};
pub use errors::Error;
pub use payload::{ActivateScene, Cycle, Effect, States, Toggle};
pub use response::{OperationResult, Response};
pub use scene::Scene;
pub use state::{State, StateDelta};
pub use transport::{MAX_SUCCESS_STATUS, classify};
pub use types::{Color, ColorValue, Direction, Power};
