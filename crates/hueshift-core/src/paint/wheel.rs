use core::f32::consts::TAU;

use super::hue::{wrap_hue, FULL_TURN_SCALE};
use super::Hsba;

/// Default number of arcs a wheel is drawn with.
pub const DEFAULT_SEGMENTS: usize = 360;

/// Hue ring shown under the pointer while a stop is being retinted.
///
/// The ring is rotated so that `focal_hue` sits at `focal_angle`: the hue
/// under the finger when the gesture starts is the hue of the stop being
/// edited, and moving around the anchor walks the ring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorWheel {
    pub saturation: f32,
    pub brightness: f32,
    pub focal_hue: f32,
    /// Radians.
    pub focal_angle: f32,
}

impl Default for ColorWheel {
    fn default() -> Self {
        Self {
            saturation: 1.0,
            brightness: 1.0,
            focal_hue: 0.0,
            focal_angle: 0.0,
        }
    }
}

/// One arc of a [`ColorWheel`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WheelSegment {
    /// Radians, measured from +X.
    pub start_angle: f32,
    pub end_angle: f32,
    pub color: Hsba,
}

impl ColorWheel {
    /// Wheel centered on `color`'s hue, drawn with its saturation and brightness.
    pub fn focused_on(color: Hsba, focal_angle: f32) -> Self {
        Self {
            saturation: color.saturation(),
            brightness: color.brightness(),
            focal_hue: color.hue(),
            focal_angle,
        }
    }

    /// Hue drawn at angle zero.
    #[inline]
    pub fn start_hue(&self) -> f32 {
        wrap_hue(self.focal_hue - self.focal_angle * FULL_TURN_SCALE)
    }

    /// Splits the full turn into `count` equal arcs. Empty when `count == 0`.
    pub fn segments(&self, count: usize) -> impl Iterator<Item = WheelSegment> + '_ {
        let start_hue = self.start_hue();
        let arc = if count == 0 { 0.0 } else { TAU / count as f32 };
        (0..count).map(move |i| {
            let start_angle = arc * i as f32;
            let hue = wrap_hue(start_hue + i as f32 / count as f32);
            WheelSegment {
                start_angle,
                end_angle: arc * (i + 1) as f32,
                color: Hsba::new(hue, self.saturation, self.brightness, 1.0),
            }
        })
    }
}
