//! Color and gradient model.
//!
//! Scope:
//! - hue arithmetic in fractional turns
//! - HSBA / RGBA colors
//! - two-stop linear gradients and their endpoint geometry
//! - the hue ring shown while a stop is edited
//!
//! Geometry primitives remain in `coords`.

pub mod color;
pub mod gradient;
pub mod hue;
pub mod wheel;

pub use color::{Hsba, Rgba};
pub use gradient::{end_point, start_point, Gradient, GradientEndpoints, GradientUniform, Stop};
pub use hue::{shift_hue, wrap_hue};
pub use wheel::{ColorWheel, WheelSegment};
