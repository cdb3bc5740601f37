use crate::coords::{normalize_angle, Corner, Rect, Vec2};
use crate::error::HueError;
use crate::paint::hue::{angle_to_hue, shift_hue, FULL_TURN_SCALE};
use crate::paint::{ColorWheel, Gradient, Hsba, Stop};

use super::angle::{angle_of, AngleMode};

/// Tuning for [`HueDrag`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragConfig {
    /// Hue turns per radian of pointer motion around the anchor.
    pub angle_to_hue_scale: f32,
    pub angle_mode: AngleMode,
    /// Distance the wheel center sits inside the anchor corner.
    pub wheel_inset: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            angle_to_hue_scale: FULL_TURN_SCALE,
            angle_mode: AngleMode::Slope,
            wheel_inset: 10.0,
        }
    }
}

/// New color for one gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HueEdit {
    pub stop: Stop,
    pub color: Hsba,
}

impl HueEdit {
    #[inline]
    pub fn apply_to(self, gradient: &mut Gradient) {
        gradient.set_color(self.stop, self.color);
    }
}

/// Press-drag session that retints one gradient stop.
///
/// On press the nearest screen corner becomes the anchor and the stop on the
/// touched side of the gradient is picked. Every move then measures how far
/// the pointer has swung around the anchor and shifts the stop's starting
/// hue by that angle times `angle_to_hue_scale`.
#[derive(Debug, Clone)]
pub struct HueDrag {
    config: DragConfig,
    corner: Corner,
    anchor: Vec2,
    stop: Stop,
    start_angle: f32,
    start_color: Hsba,
    wheel: ColorWheel,
    wheel_center: Vec2,
    last: Option<HueEdit>,
}

impl HueDrag {
    /// Starts a session for a press at `touch` inside `bounds`.
    pub fn begin(
        bounds: Rect,
        rotation: f32,
        touch: Vec2,
        colors: &[Hsba; 2],
        config: &DragConfig,
    ) -> Self {
        let corner = bounds.closest_corner(touch);
        let anchor = bounds.corner_point(corner, 0.0);
        let stop = Stop::for_touch(bounds, rotation, touch);
        let start_angle = angle_of(touch, anchor, config.angle_mode);
        let start_color = colors[stop.index()];

        log::debug!(
            "hue drag begin: corner={corner:?} stop={stop:?} angle={start_angle:.4} hue={:.4}",
            start_color.hue()
        );

        Self {
            config: *config,
            corner,
            anchor,
            stop,
            start_angle,
            start_color,
            wheel: ColorWheel::focused_on(start_color, start_angle),
            wheel_center: bounds.corner_point(corner, config.wheel_inset),
            last: None,
        }
    }

    /// Convenience over [`begin`](Self::begin) reading rotation and colors from `gradient`.
    pub fn begin_on(bounds: Rect, gradient: &Gradient, touch: Vec2, config: &DragConfig) -> Self {
        Self::begin(bounds, gradient.rotation, touch, &gradient.colors, config)
    }

    /// Computes the stop's color for the pointer at `touch`.
    ///
    /// The angle change is taken the short way round, so it never exceeds
    /// half a turn. With a scale above `1/π` a large swing can still ask for
    /// a full hue turn; that is rejected and the previous edit stays current.
    pub fn update(&mut self, touch: Vec2) -> Result<HueEdit, HueError> {
        let angle = angle_of(touch, self.anchor, self.config.angle_mode);
        let change = normalize_angle(angle - self.start_angle);
        let delta = angle_to_hue(change, self.config.angle_to_hue_scale);

        let color = shift_hue(self.start_color, delta).inspect_err(|err| {
            log::debug!("hue drag update rejected: {err}");
        })?;

        let edit = HueEdit { stop: self.stop, color };
        log::trace!("hue drag update: change={change:.4} delta={delta:.4} hue={:.4}", color.hue());
        self.last = Some(edit);
        Ok(edit)
    }

    /// Finishes the session, returning the last accepted edit.
    pub fn end(self) -> Option<HueEdit> {
        log::debug!("hue drag end: stop={:?} committed={}", self.stop, self.last.is_some());
        self.last
    }

    #[inline]
    pub fn stop(&self) -> Stop {
        self.stop
    }

    #[inline]
    pub fn corner(&self) -> Corner {
        self.corner
    }

    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    #[inline]
    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    #[inline]
    pub fn start_color(&self) -> Hsba {
        self.start_color
    }

    #[inline]
    pub fn last_edit(&self) -> Option<HueEdit> {
        self.last
    }

    /// Hue ring to show while dragging.
    #[inline]
    pub fn wheel(&self) -> &ColorWheel {
        &self.wheel
    }

    #[inline]
    pub fn wheel_center(&self) -> Vec2 {
        self.wheel_center
    }

    /// Rotation to apply to the wheel so it faces into the surface.
    #[inline]
    pub fn wheel_rotation(&self) -> f32 {
        self.corner.wheel_rotation()
    }
}
