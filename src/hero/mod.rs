//! Decorative particle animation behind the collection hero.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`particle`] | Population sizing, motion with wall bounce, pairwise links |
//! | [`canvas`] | `Canvas` trait plus SVG and recording implementations |
//! | [`clock`] | Frame clock, frame loop, stop handle |
//!
//! [`HeroAnimation`] owns the particle field and draws one frame per tick:
//! clear, links, advance, particles. A missing canvas means there is nothing
//! to animate, so [`HeroAnimation::start`] returns `None` instead of failing.
//! [`render_snapshot`] runs a fixed number of frames offline and returns the
//! last one as SVG, which the site build publishes as the hero backdrop.

pub mod canvas;
pub mod clock;
pub mod particle;

pub use canvas::{Canvas, DrawOp, Hsla, RecordingCanvas, SvgCanvas};
pub use clock::{FrameClock, FrameLoop, ManualClock, StopHandle};
pub use particle::{Link, Particle, ParticleField, Surface, link_alpha, population_size};

use crate::config::HeroConfig;
use maud::Markup;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LINK_SATURATION: f64 = 60.0;
const LINK_LIGHTNESS: f64 = 70.0;
const PARTICLE_SATURATION: f64 = 60.0;
const PARTICLE_LIGHTNESS: f64 = 60.0;
const PARTICLE_ALPHA: f64 = 0.6;

pub struct HeroAnimation<R: Rng = StdRng> {
    cfg: HeroConfig,
    field: ParticleField,
    rng: R,
}

impl<R: Rng> HeroAnimation<R> {
    /// Size a population for `surface`. `None` (no canvas) starts nothing.
    pub fn start(surface: Option<Surface>, cfg: HeroConfig, mut rng: R) -> Option<Self> {
        let surface = surface?;
        let field = ParticleField::spawn(surface, &cfg, &mut rng);
        tracing::debug!(
            width = surface.width,
            height = surface.height,
            particles = field.len(),
            "hero animation started"
        );
        Some(Self { cfg, field, rng })
    }

    /// Throw the current population away and spawn a new one for `surface`.
    pub fn resize(&mut self, surface: Surface) {
        self.field = ParticleField::spawn(surface, &self.cfg, &mut self.rng);
        tracing::debug!(
            width = surface.width,
            height = surface.height,
            particles = self.field.len(),
            "hero population regenerated"
        );
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn config(&self) -> &HeroConfig {
        &self.cfg
    }

    /// Draw one frame and advance the simulation by one tick.
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        canvas.clear(self.field.surface());

        for link in self.field.links(&self.cfg) {
            let color = Hsla::new(self.cfg.link_hue, LINK_SATURATION, LINK_LIGHTNESS, link.alpha);
            canvas.stroke_line(link.from, link.to, self.cfg.link_width, color);
        }

        self.field.step();

        for p in self.field.particles() {
            let color = Hsla::new(p.hue, PARTICLE_SATURATION, PARTICLE_LIGHTNESS, PARTICLE_ALPHA);
            canvas.fill_circle((p.x, p.y), p.r, color);
        }
    }

    /// Draw a frame for every tick of `clock` until it ends or `frame_loop`
    /// is stopped. Returns the number of frames drawn.
    pub fn run<C, K>(&mut self, canvas: &mut C, clock: &mut K, frame_loop: &mut FrameLoop) -> u64
    where
        C: Canvas + ?Sized,
        K: FrameClock + ?Sized,
    {
        frame_loop.run(clock, |_| self.frame(canvas))
    }
}

/// Deterministic when `seed` is set, OS-seeded otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Run `cfg.snapshot_frames` frames on a `snapshot_size` surface and return
/// the last frame as an SVG document over `background`.
pub fn render_snapshot(cfg: &HeroConfig, background: &str) -> Markup {
    let [width, height] = cfg.snapshot_size;
    let surface = Surface::new(f64::from(width), f64::from(height));
    let mut canvas = SvgCanvas::new(surface, background);

    if let Some(mut animation) = HeroAnimation::start(Some(surface), cfg.clone(), seeded_rng(cfg.seed)) {
        let mut clock = ManualClock::frames(u64::from(cfg.snapshot_frames));
        let frames = animation.run(&mut canvas, &mut clock, &mut FrameLoop::new());
        tracing::debug!(frames, shapes = canvas.shape_count(), "hero snapshot rendered");
    }

    canvas.to_svg()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            r: 1.0,
            hue: 250.0,
        }
    }

    fn animation(surface: Surface, seed: u64) -> HeroAnimation {
        HeroAnimation::start(Some(surface), HeroConfig::default(), StdRng::seed_from_u64(seed))
            .expect("surface given")
    }

    #[test]
    fn missing_canvas_starts_nothing() {
        let started =
            HeroAnimation::start(None, HeroConfig::default(), StdRng::seed_from_u64(1));
        assert!(started.is_none());
    }

    #[test]
    fn start_sizes_population_from_surface() {
        let anim = animation(Surface::new(800.0, 600.0), 1);
        assert_eq!(anim.field().len(), 40);
    }

    #[test]
    fn resize_replaces_population() {
        let mut anim = animation(Surface::new(800.0, 600.0), 2);
        let before = anim.field().particles().to_vec();

        anim.resize(Surface::new(1200.0, 900.0));

        assert_eq!(anim.field().len(), 80);
        assert_eq!(anim.field().surface(), Surface::new(1200.0, 900.0));
        assert_ne!(&anim.field().particles()[..before.len()], before.as_slice());
    }

    #[test]
    fn resize_to_same_size_keeps_count() {
        let mut anim = animation(Surface::new(800.0, 600.0), 3);
        anim.resize(Surface::new(800.0, 600.0));
        assert_eq!(anim.field().len(), 40);
    }

    #[test]
    fn one_tick_moves_each_particle_by_its_velocity() {
        let mut anim = animation(Surface::new(800.0, 600.0), 4);
        let mut field = ParticleField::from_particles(
            Surface::new(800.0, 600.0),
            vec![Particle {
                x: 100.0,
                y: 100.0,
                vx: 0.1,
                vy: -0.05,
                r: 1.0,
                hue: 260.0,
            }],
        );
        std::mem::swap(&mut anim.field, &mut field);

        let mut canvas = RecordingCanvas::new();
        let ran = anim.run(&mut canvas, &mut ManualClock::frames(1), &mut FrameLoop::new());

        assert_eq!(ran, 1);
        let p = anim.field().particles()[0];
        assert!((p.x - 100.1).abs() < 1e-12);
        assert!((p.y - 99.95).abs() < 1e-12);
    }

    #[test]
    fn frame_draws_links_before_particles() {
        let mut anim = animation(Surface::new(800.0, 600.0), 5);
        anim.field = ParticleField::from_particles(
            Surface::new(800.0, 600.0),
            vec![still(10.0, 10.0), still(40.0, 50.0)],
        );

        let mut canvas = RecordingCanvas::new();
        anim.frame(&mut canvas);

        let ops = canvas.frame();
        assert_eq!(canvas.clears(), 1);
        assert_eq!(ops.len(), 3);
        match ops[0] {
            DrawOp::Line { width, color, .. } => {
                assert_eq!(width, 0.5);
                assert_eq!(color.hue, 270.0);
                assert_eq!(color.lightness, 70.0);
                assert!((color.alpha - (1.0 - 50.0 / 150.0) * 0.15).abs() < 1e-12);
            }
            ref other => panic!("expected line, got {other:?}"),
        }
        for op in &ops[1..] {
            match op {
                DrawOp::Circle { color, .. } => {
                    assert_eq!(color.hue, 250.0);
                    assert_eq!(color.saturation, 60.0);
                    assert_eq!(color.lightness, 60.0);
                    assert_eq!(color.alpha, 0.6);
                }
                other => panic!("expected circle, got {other:?}"),
            }
        }
    }

    #[test]
    fn stop_handle_halts_animation() {
        let mut anim = animation(Surface::new(800.0, 600.0), 6);
        let mut frame_loop = FrameLoop::new();
        let handle = frame_loop.stop_handle();
        let mut canvas = RecordingCanvas::new();

        anim.run(&mut canvas, &mut ManualClock::frames(3), &mut frame_loop);
        handle.stop();
        let ran = anim.run(&mut canvas, &mut ManualClock::frames(3), &mut frame_loop);

        assert_eq!(ran, 0);
        assert_eq!(canvas.clears(), 3);
    }

    #[test]
    fn seeded_snapshot_is_reproducible() {
        let cfg = HeroConfig {
            snapshot_size: [400, 300],
            snapshot_frames: 10,
            seed: Some(42),
            ..HeroConfig::default()
        };
        let a = render_snapshot(&cfg, "#08061a").into_string();
        let b = render_snapshot(&cfg, "#08061a").into_string();

        assert_eq!(a, b);
        assert!(a.contains(r#"viewBox="0 0 400 300""#));
        assert_eq!(a.matches("<circle").count(), 10);
    }
}
