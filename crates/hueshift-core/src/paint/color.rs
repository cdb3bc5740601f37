use super::hue::{shift_hue, wrap_hue};
use crate::error::HueError;

/// Color in hue/saturation/brightness space with straight alpha.
///
/// Invariant:
/// - `hue` is a fractional turn in `[0, 1)`; every constructor wraps it.
///
/// Values are immutable; edits return a new color.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsba {
    hue: f32,
    saturation: f32,
    brightness: f32,
    alpha: f32,
}

impl Hsba {
    /// Creates a color, wrapping `hue` into `[0, 1)`.
    ///
    /// A NaN or infinite hue becomes `0` (red) and a warning is logged;
    /// the other components are stored as given.
    #[inline]
    pub fn new(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation,
            brightness,
            alpha,
        }
    }

    #[inline]
    pub fn hue(self) -> f32 {
        self.hue
    }

    #[inline]
    pub fn saturation(self) -> f32 {
        self.saturation
    }

    #[inline]
    pub fn brightness(self) -> f32 {
        self.brightness
    }

    #[inline]
    pub fn alpha(self) -> f32 {
        self.alpha
    }

    /// Same color with `hue` replaced (and wrapped).
    #[inline]
    pub fn with_hue(self, hue: f32) -> Self {
        Self::new(hue, self.saturation, self.brightness, self.alpha)
    }

    /// See [`shift_hue`].
    #[inline]
    pub fn shifted(self, delta: f32) -> Result<Self, HueError> {
        shift_hue(self, delta)
    }

    /// Converts to straight RGBA. Saturation and brightness are clamped to `[0, 1]`.
    pub fn to_rgba(self) -> Rgba {
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.brightness.clamp(0.0, 1.0);

        let h6 = self.hue * 6.0;
        let sector = h6.floor();
        let f = h6 - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgba::new(r, g, b, self.alpha)
    }
}

/// Straight (non-premultiplied) RGBA color, components in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color with each channel drawn as `k / 255` for `k` in `0..255`.
    pub fn random_opaque(rng: &mut fastrand::Rng) -> Self {
        let mut channel = || rng.u8(0..255) as f32 / 255.0;
        Self::new(channel(), channel(), channel(), 1.0)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts to hue/saturation/brightness. Grays report hue `0`.
    pub fn to_hsba(self) -> Hsba {
        let r = self.r.clamp(0.0, 1.0);
        let g = self.g.clamp(0.0, 1.0);
        let b = self.b.clamp(0.0, 1.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        let hue = if delta <= 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };

        Hsba::new(hue, saturation, max, self.a)
    }
}

impl From<Hsba> for Rgba {
    #[inline]
    fn from(c: Hsba) -> Self {
        c.to_rgba()
    }
}

impl From<Rgba> for Hsba {
    #[inline]
    fn from(c: Rgba) -> Self {
        c.to_hsba()
    }
}
