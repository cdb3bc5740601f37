use core::f32::consts::PI;

/// One of the four corners of a rectangle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    #[inline]
    pub fn is_right(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight)
    }

    #[inline]
    pub fn is_bottom(self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight)
    }

    /// Rotation applied to a color wheel anchored at this corner so its
    /// visible quarter faces the interior.
    #[inline]
    pub fn wheel_rotation(self) -> f32 {
        if self.is_right() { PI } else { 0.0 }
    }
}
