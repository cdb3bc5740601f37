use anyhow::{Context, Result};

use hueshift_core::coords::{Rect, Vec2};
use hueshift_core::input::{DragConfig, HueDrag, RotationTracker};
use hueshift_core::logging::{init_logging, LoggingConfig};
use hueshift_core::paint::wheel::DEFAULT_SEGMENTS;
use hueshift_core::paint::{Gradient, GradientUniform};

/// Scripted session parameters.
#[derive(Debug, Clone)]
struct ReplayConfig {
    surface: Rect,
    seed: u64,
    /// Total rotation applied by the two-finger gesture, radians.
    rotate_by: f32,
    /// Where the press lands.
    press_at: Vec2,
    /// How far the finger swings around the anchor corner, radians.
    swing_by: f32,
    /// Move events per gesture.
    steps: u32,
    drag: DragConfig,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            surface: Rect::new(0.0, 0.0, 320.0, 480.0),
            seed: 0x6772_6164,
            rotate_by: 0.6,
            press_at: Vec2::new(100.0, 300.0),
            swing_by: 0.5,
            steps: 8,
            drag: DragConfig::default(),
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut config = ReplayConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        config.seed = arg
            .parse()
            .with_context(|| format!("seed must be an unsigned integer, got {arg:?}"))?;
    }

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║        HUESHIFT STUDIO  ·  replay      ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    replay(&config)
}

fn replay(config: &ReplayConfig) -> Result<()> {
    let mut rng = fastrand::Rng::with_seed(config.seed);
    let steps = config.steps.max(1);

    // ── shake ─────────────────────────────────────────────────────────────
    let mut gradient = Gradient::random(&mut rng);
    log::info!("new gradient (seed {})", config.seed);
    print_gradient("shake", &gradient, config.surface);

    // ── rotate ────────────────────────────────────────────────────────────
    let tracker = RotationTracker::begin(&gradient);
    for i in 1..=steps {
        tracker.changed_by(&mut gradient, config.rotate_by * i as f32 / steps as f32);
    }
    print_gradient("rotate", &gradient, config.surface);

    // ── press-drag ────────────────────────────────────────────────────────
    let mut drag = HueDrag::begin_on(config.surface, &gradient, config.press_at, &config.drag);
    log::info!(
        "editing {:?} stop from {:?} corner, wheel of {} segments at {:?}",
        drag.stop(),
        drag.corner(),
        drag.wheel().segments(DEFAULT_SEGMENTS).count(),
        drag.wheel_center()
    );

    let anchor = drag.anchor();
    let offset = config.press_at - anchor;
    for i in 1..=steps {
        let by = config.swing_by * i as f32 / steps as f32;
        let (s, c) = by.sin_cos();
        let touch = anchor + Vec2::new(offset.x * c - offset.y * s, offset.x * s + offset.y * c);

        match drag.update(touch) {
            Ok(edit) => {
                edit.apply_to(&mut gradient);
                log::info!("move {i}: hue {:.4}", edit.color.hue());
            }
            Err(err) => log::warn!("move {i}: {err}"),
        }
    }

    let committed = drag.end().context("drag ended without an accepted edit")?;
    log::info!("committed {:?} hue {:.4}", committed.stop, committed.color.hue());
    print_gradient("edit", &gradient, config.surface);

    Ok(())
}

fn print_gradient(label: &str, gradient: &Gradient, surface: Rect) {
    let GradientUniform { start, end, start_color, end_color } = gradient.uniform(surface);
    println!("  [{label}] rotation {:+.3} rad", gradient.rotation);
    println!(
        "    start ({:7.2}, {:7.2})  hue {:.3}  rgb {}",
        start[0],
        start[1],
        gradient.colors[0].hue(),
        hex(start_color)
    );
    println!(
        "    end   ({:7.2}, {:7.2})  hue {:.3}  rgb {}",
        end[0],
        end[1],
        gradient.colors[1].hue(),
        hex(end_color)
    );
    println!();
}

fn hex(rgba: [f32; 4]) -> String {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", byte(rgba[0]), byte(rgba[1]), byte(rgba[2]))
}
