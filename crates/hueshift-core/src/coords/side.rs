use super::Vec2;

/// Signed area test of `point` against the directed line `line_a -> line_b`.
///
/// Returns `(b - a) × (p - a)`. Positive means `point` is counter-clockwise
/// of the line in y-up axes; on a y-down surface with the line pointing
/// right, that is below it. Zero means collinear.
#[inline]
pub fn side_of(line_a: Vec2, line_b: Vec2, point: Vec2) -> f32 {
    (line_b - line_a).cross(point - line_a)
}

/// Half-plane a point falls into relative to a directed line.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    /// Strictly positive cross product.
    Positive,
    /// Negative or zero cross product.
    Negative,
}

impl Side {
    /// Classifies a cross product. Collinear points (exactly zero) and NaN
    /// fall on the `Negative` side.
    #[inline]
    pub fn from_cross(cross: f32) -> Side {
        if cross > 0.0 { Side::Positive } else { Side::Negative }
    }

    #[inline]
    pub fn of(line_a: Vec2, line_b: Vec2, point: Vec2) -> Side {
        Side::from_cross(side_of(line_a, line_b, point))
    }

    #[inline]
    pub fn flipped(self) -> Side {
        match self {
            Side::Positive => Side::Negative,
            Side::Negative => Side::Positive,
        }
    }
}
