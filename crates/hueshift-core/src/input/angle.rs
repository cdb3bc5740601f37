use core::f32::consts::FRAC_PI_2;

use crate::coords::Vec2;

/// How a pointer position is turned into an angle around an anchor.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum AngleMode {
    /// `atan(dy / dx)`: the slope angle in `[-π/2, π/2]`. Opposite
    /// directions through the anchor give the same angle, which is harmless
    /// while the pointer stays in the quarter facing the anchor corner.
    #[default]
    Slope,
    /// `atan2(dy, dx)`: the full polar angle in `(-π, π]`.
    Quadrant,
}

/// Angle of `point` around `anchor`, in radians.
///
/// A point straight above or below the anchor gives `±π/2` in `Slope`
/// mode; a point on the anchor gives `0`. Finite inputs never yield NaN.
pub fn angle_of(point: Vec2, anchor: Vec2, mode: AngleMode) -> f32 {
    let d = point - anchor;
    if d.x == 0.0 && d.y == 0.0 {
        return 0.0;
    }
    match mode {
        AngleMode::Slope if d.x == 0.0 => FRAC_PI_2.copysign(d.y),
        AngleMode::Slope => (d.y / d.x).atan(),
        AngleMode::Quadrant => d.y.atan2(d.x),
    }
}
