use core::f32::consts::{PI, TAU};

/// Maps any finite angle into `(-π, π]`.
///
/// Non-finite input is returned unchanged.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return angle;
    }
    let a = (angle + PI).rem_euclid(TAU) - PI;
    if a <= -PI { a + TAU } else { a }
}
