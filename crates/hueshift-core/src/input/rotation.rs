use crate::paint::Gradient;

/// Two-finger rotation applied to a gradient.
///
/// Platform recognizers either accept a seed and then report absolute
/// rotations, or start at zero and report a delta. Both are covered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RotationTracker {
    initial: f32,
}

impl RotationTracker {
    pub fn begin(gradient: &Gradient) -> Self {
        log::debug!("rotation begin: {:.4}", gradient.rotation);
        Self { initial: gradient.rotation }
    }

    /// Value to seed the platform recognizer with.
    #[inline]
    pub fn seed(&self) -> f32 {
        self.initial
    }

    /// Recognizer was seeded; `rotation` is the new absolute angle.
    #[inline]
    pub fn changed(&self, gradient: &mut Gradient, rotation: f32) {
        gradient.rotate(rotation);
    }

    /// Recognizer reports rotation since the gesture began.
    #[inline]
    pub fn changed_by(&self, gradient: &mut Gradient, delta: f32) {
        gradient.rotate(self.initial + delta);
    }
}
