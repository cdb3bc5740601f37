//! Hue arithmetic in fractional turns of the color wheel.

use core::f32::consts::TAU;

use super::Hsba;
use crate::error::HueError;

/// Hue turns per radian of pointer rotation when a full circle of motion
/// sweeps the whole wheel once.
pub const FULL_TURN_SCALE: f32 = 1.0 / TAU;

/// Wraps a hue into `[0, 1)` with a true modulo, so inputs several turns
/// away are handled as well as single-step overflow.
///
/// Non-finite input maps to `0.0` and is logged as a warning.
#[inline]
pub fn wrap_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        log::warn!("non-finite hue {hue} replaced with 0");
        return 0.0;
    }
    let h = hue.rem_euclid(1.0);
    // rem_euclid rounds tiny negative inputs up to exactly 1.0.
    if h >= 1.0 { 0.0 } else { h }
}

/// Returns `color` with its hue moved by `delta` turns.
///
/// `delta` must be finite and strictly inside `(-1, 1)`; anything else is
/// rejected rather than folded.
pub fn shift_hue(color: Hsba, delta: f32) -> Result<Hsba, HueError> {
    if !delta.is_finite() {
        return Err(HueError::NonFinite { delta });
    }
    if delta.abs() >= 1.0 {
        return Err(HueError::DeltaOutOfRange { delta });
    }
    Ok(color.with_hue(color.hue() + delta))
}

/// Converts a pointer angle change (radians) into a hue delta (turns).
#[inline]
pub fn angle_to_hue(angle_change: f32, scale: f32) -> f32 {
    angle_change * scale
}
