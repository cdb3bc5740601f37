//! Gesture composition.
//!
//! Turns pointer positions into gradient edits. Event dispatch stays with the
//! caller: it feeds begin/change/end positions and applies the results.

mod angle;
mod drag;
mod rotation;

pub use angle::{angle_of, AngleMode};
pub use drag::{DragConfig, HueDrag, HueEdit};
pub use rotation::RotationTracker;
