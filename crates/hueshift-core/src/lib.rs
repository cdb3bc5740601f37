//! Hueshift core crate.
//!
//! Pure geometry and color math behind two-stop gradient editing:
//! rotation angle to gradient endpoints, hue wrapping and shifting,
//! touch-to-angle mapping and side classification. The `input` module
//! composes these into the press-drag and rotation gestures a UI layer drives.

pub mod coords;
pub mod error;
pub mod input;
pub mod logging;
pub mod paint;

pub use error::HueError;
