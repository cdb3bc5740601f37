use core::f32::consts::{FRAC_PI_2, PI};

use bytemuck::{Pod, Zeroable};

use crate::coords::{normalize_angle, Rect, Side, Vec2};

use super::{Hsba, Rgba};

/// Start of a gradient rotated by `angle` radians, on the unit square.
///
/// Angle `0` puts the start at the top center; positive angles move it
/// towards the right edge.
#[inline]
pub fn start_point(angle: f32) -> Vec2 {
    Vec2::new(0.5 + angle.sin() / 2.0, 0.5 - angle.cos() / 2.0)
}

/// End of a gradient rotated by `angle` radians, on the unit square.
///
/// Always the reflection of [`start_point`] through `(0.5, 0.5)`.
#[inline]
pub fn end_point(angle: f32) -> Vec2 {
    Vec2::new(0.5 - angle.sin() / 2.0, 0.5 + angle.cos() / 2.0)
}

/// Random rotation in `[-π/2, π/2)`, quantized to thousandths of π.
pub fn random_angle(rng: &mut fastrand::Rng) -> f32 {
    rng.u32(0..1000) as f32 / 1000.0 * PI - FRAC_PI_2
}

/// Start/end positions of a linear color ramp.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GradientEndpoints {
    pub start: Vec2,
    pub end: Vec2,
}

impl GradientEndpoints {
    /// Endpoints on the unit square's inscribed circle for `angle`.
    #[inline]
    pub fn for_angle(angle: f32) -> Self {
        Self {
            start: start_point(angle),
            end: end_point(angle),
        }
    }

    /// Maps unit-square endpoints onto `rect`.
    #[inline]
    pub fn scaled_to(self, rect: Rect) -> Self {
        Self {
            start: rect.denormalize(self.start),
            end: rect.denormalize(self.end),
        }
    }
}

/// One of the two color stops of a [`Gradient`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Stop {
    /// Stop at the start point (index 0).
    Start,
    /// Stop at the end point (index 1).
    End,
}

impl Stop {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Stop::Start => 0,
            Stop::End => 1,
        }
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Stop> {
        match index {
            0 => Some(Stop::Start),
            1 => Some(Stop::End),
            _ => None,
        }
    }

    #[inline]
    pub fn other(self) -> Stop {
        match self {
            Stop::Start => Stop::End,
            Stop::End => Stop::Start,
        }
    }

    /// Which stop a touch inside `bounds` is nearer to, for a gradient
    /// rotated by `rotation`.
    ///
    /// The touch is classified against the line through the center of
    /// `bounds` that runs along the gradient's iso-color boundary, taken
    /// after the unit-square endpoints are stretched onto `bounds`. On a
    /// non-square surface that line is not at `rotation` itself: its slope
    /// picks up the `width / height` aspect. An empty `bounds` is treated as
    /// square.
    ///
    /// The line is built from the left to the right edge, so its direction
    /// reverses once the rotation leaves `(-π/2, π/2)`; the mapping flips
    /// there to compensate. The rotation is normalized into `(-π, π]` first,
    /// so angles a full turn apart always agree. Touches exactly on the line
    /// go to `Start` inside that range and `End` outside it.
    pub fn for_touch(bounds: Rect, rotation: f32, touch: Vec2) -> Stop {
        let rotation = normalize_angle(rotation);
        let bounds = bounds.normalized();
        let mid = bounds.center();

        let aspect = if bounds.is_empty() { 1.0 } else { bounds.width() / bounds.height() };
        let dy = (bounds.width() / 2.0) * aspect * rotation.tan();
        let a = Vec2::new(bounds.min().x, mid.y - dy);
        let b = Vec2::new(bounds.max().x, mid.y + dy);

        let side = Side::of(a, b, touch);
        let side = if rotation > -FRAC_PI_2 && rotation < FRAC_PI_2 {
            side
        } else {
            side.flipped()
        };

        match side {
            Side::Positive => Stop::End,
            Side::Negative => Stop::Start,
        }
    }
}

/// Two-stop linear gradient: the colors plus the rotation that places them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gradient {
    pub colors: [Hsba; 2],
    /// Radians; `0` runs top to bottom.
    pub rotation: f32,
}

impl Gradient {
    #[inline]
    pub fn new(start: Hsba, end: Hsba, rotation: f32) -> Self {
        Self {
            colors: [start, end],
            rotation,
        }
    }

    /// Two random opaque colors at a random rotation in `[-π/2, π/2)`.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        let start = Rgba::random_opaque(rng).to_hsba();
        let end = Rgba::random_opaque(rng).to_hsba();
        Self::new(start, end, random_angle(rng))
    }

    #[inline]
    pub fn color(&self, stop: Stop) -> Hsba {
        self.colors[stop.index()]
    }

    #[inline]
    pub fn set_color(&mut self, stop: Stop, color: Hsba) {
        self.colors[stop.index()] = color;
    }

    #[inline]
    pub fn rotate(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    #[inline]
    pub fn endpoints(&self) -> GradientEndpoints {
        GradientEndpoints::for_angle(self.rotation)
    }

    /// Packs the gradient for upload, with endpoints scaled into `rect`.
    pub fn uniform(&self, rect: Rect) -> GradientUniform {
        let ends = self.endpoints().scaled_to(rect);
        GradientUniform {
            start: [ends.start.x, ends.start.y],
            end: [ends.end.x, ends.end.y],
            start_color: self.colors[0].to_rgba().to_array(),
            end_color: self.colors[1].to_rgba().to_array(),
        }
    }
}

/// GPU-ready gradient parameters (48 bytes, 16-byte aligned fields).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GradientUniform {
    pub start: [f32; 2],
    pub end: [f32; 2],
    /// Straight-alpha RGBA.
    pub start_color: [f32; 4],
    /// Straight-alpha RGBA.
    pub end_color: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_4;

    const EPS: f32 = 1e-6;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn screen() -> Rect {
        Rect::new(0.0, 0.0, 320.0, 480.0)
    }

    // ── endpoints ─────────────────────────────────────────────────────────

    #[test]
    fn zero_angle_is_vertical() {
        assert!(close(start_point(0.0), Vec2::new(0.5, 0.0)));
        assert!(close(end_point(0.0), Vec2::new(0.5, 1.0)));
    }

    #[test]
    fn quarter_turn_is_horizontal() {
        assert!(close(start_point(FRAC_PI_2), Vec2::new(1.0, 0.5)));
        assert!(close(end_point(FRAC_PI_2), Vec2::new(0.0, 0.5)));
    }

    #[test]
    fn endpoints_are_antipodal() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..500 {
            let a = (rng.f32() - 0.5) * 100.0;
            let e = GradientEndpoints::for_angle(a);
            assert!((e.start.x + e.end.x - 1.0).abs() < EPS, "angle {a}");
            assert!((e.start.y + e.end.y - 1.0).abs() < EPS, "angle {a}");
        }
    }

    #[test]
    fn endpoints_lie_on_inscribed_circle() {
        let center = Vec2::new(0.5, 0.5);
        for i in -20..20 {
            let e = GradientEndpoints::for_angle(i as f32 * 0.7);
            assert!((e.start.distance(center) - 0.5).abs() < 1e-5);
            assert!((0.0..=1.0).contains(&e.start.x) && (0.0..=1.0).contains(&e.start.y));
        }
    }

    #[test]
    fn scaled_to_surface() {
        let e = GradientEndpoints::for_angle(0.0).scaled_to(screen());
        assert!((e.start.x - 160.0).abs() < 1e-3 && e.start.y.abs() < 1e-3);
        assert!((e.end.x - 160.0).abs() < 1e-3 && (e.end.y - 480.0).abs() < 1e-3);
    }

    #[test]
    fn random_angle_range() {
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..1000 {
            let a = random_angle(&mut rng);
            assert!((-FRAC_PI_2..FRAC_PI_2).contains(&a), "{a}");
        }
    }

    // ── Stop ──────────────────────────────────────────────────────────────

    #[test]
    fn stop_indices_round_trip() {
        assert_eq!(Stop::from_index(Stop::Start.index()), Some(Stop::Start));
        assert_eq!(Stop::from_index(Stop::End.index()), Some(Stop::End));
        assert_eq!(Stop::from_index(2), None);
        assert_eq!(Stop::Start.other(), Stop::End);
    }

    #[test]
    fn vertical_gradient_splits_top_and_bottom() {
        assert_eq!(Stop::for_touch(screen(), 0.0, Vec2::new(160.0, 400.0)), Stop::End);
        assert_eq!(Stop::for_touch(screen(), 0.0, Vec2::new(160.0, 80.0)), Stop::Start);
    }

    #[test]
    fn upside_down_gradient_flips_the_mapping() {
        assert_eq!(Stop::for_touch(screen(), PI, Vec2::new(160.0, 400.0)), Stop::Start);
        assert_eq!(Stop::for_touch(screen(), PI, Vec2::new(160.0, 80.0)), Stop::End);
    }

    #[test]
    fn quarter_turn_splits_left_and_right() {
        // Start is on the right edge at +π/2.
        assert_eq!(Stop::for_touch(screen(), FRAC_PI_2, Vec2::new(280.0, 240.0)), Stop::Start);
        assert_eq!(Stop::for_touch(screen(), FRAC_PI_2, Vec2::new(40.0, 240.0)), Stop::End);
    }

    #[test]
    fn tilted_gradient_picks_nearer_endpoint() {
        let rect = screen();
        let mut rng = fastrand::Rng::with_seed(5);
        for _ in 0..200 {
            let rotation = (rng.f32() - 0.5) * 4.0 * PI;
            let ends = GradientEndpoints::for_angle(rotation).scaled_to(rect);
            let center = rect.center();
            // Points a third of the way from the center towards each endpoint.
            let near_start = center + (ends.start - center) * 0.3;
            let near_end = center + (ends.end - center) * 0.3;
            assert_eq!(Stop::for_touch(rect, rotation, near_start), Stop::Start, "rot {rotation}");
            assert_eq!(Stop::for_touch(rect, rotation, near_end), Stop::End, "rot {rotation}");
        }
    }

    #[test]
    fn tall_surface_uses_the_stretched_boundary() {
        // At π/4 on 320x480 the boundary is steeper than 45°; this touch is
        // below it even though it is above the unstretched diagonal.
        let touch = screen().center() + Vec2::new(100.0, 80.0);
        assert_eq!(Stop::for_touch(screen(), FRAC_PI_4, touch), Stop::End);
        assert_eq!(Stop::for_touch(screen(), FRAC_PI_4 + PI, touch), Stop::Start);
    }

    #[test]
    fn off_axis_touches_follow_the_projection_on_the_ramp() {
        let mut rng = fastrand::Rng::with_seed(17);
        for rect in [screen(), Rect::new(20.0, 40.0, 600.0, 200.0)] {
            let center = rect.center();
            for _ in 0..500 {
                let rotation = (rng.f32() - 0.5) * 4.0 * PI;
                // Keep away from a near-vertical boundary where the left/right construction degenerates.
                if (normalize_angle(rotation).abs() - FRAC_PI_2).abs() < 0.01 {
                    continue;
                }
                let touch = rect.denormalize(Vec2::new(rng.f32(), rng.f32()));
                let ends = GradientEndpoints::for_angle(rotation).scaled_to(rect);
                let axis = ends.end - ends.start;
                let offset = touch - center;
                let along = offset.x * axis.x + offset.y * axis.y;
                // Skip touches within about a pixel of the boundary.
                if along.abs() < ends.start.distance(ends.end) {
                    continue;
                }
                let expected = if along > 0.0 { Stop::End } else { Stop::Start };
                assert_eq!(Stop::for_touch(rect, rotation, touch), expected, "rot {rotation} touch {touch:?}");
            }
        }
    }

    #[test]
    fn zero_height_bounds_fall_back_to_square() {
        let rect = Rect::new(0.0, 0.0, 100.0, 0.0);
        assert_eq!(Stop::for_touch(rect, 0.3, Vec2::new(50.0, 30.0)), Stop::End);
        assert_eq!(Stop::for_touch(rect, 0.3, Vec2::new(50.0, -20.0)), Stop::Start);
    }

    #[test]
    fn full_turns_do_not_change_the_stop() {
        let touch = Vec2::new(100.0, 350.0);
        for rotation in [0.3_f32, -1.2, 2.5] {
            let a = Stop::for_touch(screen(), rotation, touch);
            let b = Stop::for_touch(screen(), rotation + 2.0 * PI, touch);
            assert_eq!(a, b, "rot {rotation}");
        }
    }

    #[test]
    fn touch_on_the_boundary_is_deterministic() {
        let center = screen().center();
        assert_eq!(Stop::for_touch(screen(), 0.0, center), Stop::Start);
        assert_eq!(Stop::for_touch(screen(), 0.0, Vec2::new(0.0, 240.0)), Stop::Start);
    }

    // ── Gradient ──────────────────────────────────────────────────────────

    #[test]
    fn set_color_targets_one_stop() {
        let mut g = Gradient::new(Hsba::new(0.1, 1.0, 1.0, 1.0), Hsba::new(0.6, 1.0, 1.0, 1.0), 0.0);
        g.set_color(Stop::End, Hsba::new(0.9, 0.5, 0.5, 1.0));
        assert_eq!(g.color(Stop::Start).hue(), 0.1);
        assert_eq!(g.color(Stop::End), Hsba::new(0.9, 0.5, 0.5, 1.0));
    }

    #[test]
    fn random_gradient_is_seeded() {
        let a = Gradient::random(&mut fastrand::Rng::with_seed(9));
        let b = Gradient::random(&mut fastrand::Rng::with_seed(9));
        assert_eq!(a, b);
        assert_eq!(a.colors[0].alpha(), 1.0);
    }

    #[test]
    fn uniform_packs_scaled_endpoints_and_rgba() {
        let g = Gradient::new(Hsba::new(0.0, 1.0, 1.0, 1.0), Hsba::new(2.0 / 3.0, 1.0, 1.0, 1.0), 0.0);
        let u = g.uniform(screen());
        assert!((u.start[0] - 160.0).abs() < 1e-3 && u.start[1].abs() < 1e-3);
        assert!((u.end[1] - 480.0).abs() < 1e-3);
        assert!((u.start_color[0] - 1.0).abs() < 1e-5);
        assert!((u.end_color[2] - 1.0).abs() < 1e-5);
        assert_eq!(bytemuck::bytes_of(&u).len(), 48);
    }
}
