use super::{Corner, Vec2};

/// Axis-aligned rectangle in surface coordinates (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Maps a point in the unit square onto this rectangle.
    #[inline]
    pub fn denormalize(self, unit: Vec2) -> Vec2 {
        self.origin + unit.scale(self.size)
    }

    /// Corner of the rectangle nearest to `p`.
    ///
    /// Points exactly on a midline go to the top/left side.
    pub fn closest_corner(self, p: Vec2) -> Corner {
        let mid = self.center();
        match (p.x > mid.x, p.y > mid.y) {
            (false, false) => Corner::TopLeft,
            (true, false) => Corner::TopRight,
            (false, true) => Corner::BottomLeft,
            (true, true) => Corner::BottomRight,
        }
    }

    /// Position of `corner`, moved `inset` units towards the interior on both axes.
    pub fn corner_point(self, corner: Corner, inset: f32) -> Vec2 {
        let r = self.normalized();
        let min = r.min();
        let max = r.max();
        match corner {
            Corner::TopLeft => Vec2::new(min.x + inset, min.y + inset),
            Corner::TopRight => Vec2::new(max.x - inset, min.y + inset),
            Corner::BottomLeft => Vec2::new(min.x + inset, max.y - inset),
            Corner::BottomRight => Vec2::new(max.x - inset, max.y - inset),
        }
    }
}
