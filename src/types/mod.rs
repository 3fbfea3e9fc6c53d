//! Value types shared by devices, scenes and request payloads.

mod color;
mod direction;
mod power;

pub use color::{Color, ColorValue};
pub use direction::Direction;
pub use power::Power;
