//! Coordinate and geometry types shared by gradient math and gesture handling.
//!
//! Points live in the caller's surface space. Nothing here assumes an axis
//! orientation; the usual setup is logical pixels with origin top-left,
//! +X right, +Y down.

mod angle;
mod corner;
mod rect;
mod side;
mod vec2;

pub use angle::normalize_angle;
pub use corner::Corner;
pub use rect::Rect;
pub use side::{side_of, Side};
pub use vec2::Vec2;
