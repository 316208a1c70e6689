//! Particle field simulation.
//!
//! Each particle drifts at constant velocity and bounces off the canvas
//! edges. Every frame, pairs closer than `link_distance` are joined by a line
//! whose opacity falls linearly with distance. Pair checks are O(n²), which is
//! why the population is capped by [`population_size`].

use crate::config::HeroConfig;
use rand::Rng;

/// Pixel size of the canvas the field lives in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    /// Negative dimensions are treated as zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub r: f64,
    pub hue: f64,
}

impl Particle {
    /// A particle placed uniformly at random on `surface`.
    pub fn random<R: Rng + ?Sized>(surface: Surface, cfg: &HeroConfig, rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0.0..=surface.width),
            y: rng.random_range(0.0..=surface.height),
            vx: rng.random_range(-cfg.max_speed..=cfg.max_speed),
            vy: rng.random_range(-cfg.max_speed..=cfg.max_speed),
            r: rng.random_range(cfg.radius[0]..=cfg.radius[1]),
            hue: rng.random_range(cfg.hue[0]..=cfg.hue[1]),
        }
    }

    /// Move one frame. An axis whose move would carry the particle past a
    /// wall, in the direction it is travelling, has its velocity flipped first.
    /// Positions are never clamped.
    pub fn advance(&mut self, surface: Surface) {
        self.vx = bounce(self.x, self.vx, surface.width);
        self.vy = bounce(self.y, self.vy, surface.height);
        self.x += self.vx;
        self.y += self.vy;
    }
}

fn bounce(pos: f64, vel: f64, extent: f64) -> f64 {
    let next = pos + vel;
    if (next < 0.0 && vel < 0.0) || (next > extent && vel > 0.0) {
        -vel
    } else {
        vel
    }
}

/// `min(max_particles, floor(width * height / area_per_particle))`.
pub fn population_size(surface: Surface, cfg: &HeroConfig) -> usize {
    let fit = (surface.width * surface.height / cfg.area_per_particle).floor();
    (fit.max(0.0) as usize).min(cfg.max_particles)
}

/// A line between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

/// Opacity of a link at `dist`, or `None` when the pair is too far apart.
pub fn link_alpha(dist: f64, cfg: &HeroConfig) -> Option<f64> {
    (dist < cfg.link_distance).then(|| (1.0 - dist / cfg.link_distance) * cfg.link_alpha)
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    surface: Surface,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// A fresh population sized for `surface`.
    pub fn spawn<R: Rng + ?Sized>(surface: Surface, cfg: &HeroConfig, rng: &mut R) -> Self {
        let count = population_size(surface, cfg);
        let particles = (0..count)
            .map(|_| Particle::random(surface, cfg, rng))
            .collect();
        Self { surface, particles }
    }

    /// A field with a given population, for replaying known states.
    pub fn from_particles(surface: Surface, particles: Vec<Particle>) -> Self {
        Self { surface, particles }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Every unordered pair within link range.
    pub fn links(&self, cfg: &HeroConfig) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist = (a.x - b.x).hypot(a.y - b.y);
                if let Some(alpha) = link_alpha(dist, cfg) {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        alpha,
                    });
                }
            }
        }
        links
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let surface = self.surface;
        for p in &mut self.particles {
            p.advance(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            r: 1.0,
            hue: 270.0,
        }
    }

    #[test]
    fn population_for_800_by_600_is_40() {
        let cfg = HeroConfig::default();
        assert_eq!(population_size(Surface::new(800.0, 600.0), &cfg), 40);
    }

    #[test]
    fn population_is_capped() {
        let cfg = HeroConfig::default();
        assert_eq!(population_size(Surface::new(4000.0, 2000.0), &cfg), 80);
    }

    #[test]
    fn population_of_tiny_canvas_is_zero() {
        let cfg = HeroConfig::default();
        assert_eq!(population_size(Surface::new(100.0, 100.0), &cfg), 0);
        assert_eq!(population_size(Surface::new(0.0, 600.0), &cfg), 0);
    }

    #[test]
    fn spawned_particles_respect_ranges() {
        let cfg = HeroConfig::default();
        let surface = Surface::new(1200.0, 800.0);
        let field = ParticleField::spawn(surface, &cfg, &mut StdRng::seed_from_u64(3));

        assert_eq!(field.len(), 80);
        for p in field.particles() {
            assert!((0.0..=1200.0).contains(&p.x));
            assert!((0.0..=800.0).contains(&p.y));
            assert!(p.vx.abs() <= 0.15 && p.vy.abs() <= 0.15);
            assert!((0.5..=2.0).contains(&p.r));
            assert!((240.0..=300.0).contains(&p.hue));
        }
    }

    #[test]
    fn left_wall_reflects_negative_velocity() {
        let surface = Surface::new(800.0, 600.0);
        let mut p = particle(0.0, 300.0, -0.1, 0.0);
        p.advance(surface);
        assert!(p.vx > 0.0);
        assert!((0.0..=800.0).contains(&p.x));
    }

    #[test]
    fn right_wall_reflects_positive_velocity() {
        let surface = Surface::new(800.0, 600.0);
        let mut p = particle(799.95, 300.0, 0.1, 0.0);
        p.advance(surface);
        assert_eq!(p.vx, -0.1);
        assert!(p.x <= 800.0);
    }

    #[test]
    fn axes_reflect_independently() {
        let surface = Surface::new(800.0, 600.0);
        let mut p = particle(400.0, 600.0, 0.1, 0.1);
        p.advance(surface);
        assert_eq!(p.vx, 0.1);
        assert_eq!(p.vy, -0.1);
    }

    #[test]
    fn reflection_keeps_speed() {
        let surface = Surface::new(800.0, 600.0);
        let mut p = particle(0.0, 0.0, -0.12, -0.07);
        p.advance(surface);
        assert_eq!((p.vx, p.vy), (0.12, 0.07));
    }

    #[test]
    fn particles_stay_inside_over_many_steps() {
        let cfg = HeroConfig::default();
        let surface = Surface::new(300.0, 200.0);
        let mut field = ParticleField::spawn(surface, &cfg, &mut StdRng::seed_from_u64(11));
        for _ in 0..5000 {
            field.step();
        }
        for p in field.particles() {
            assert!((0.0..=300.0).contains(&p.x), "x = {}", p.x);
            assert!((0.0..=200.0).contains(&p.y), "y = {}", p.y);
        }
    }

    #[test]
    fn outside_particle_drifts_back() {
        let surface = Surface::new(100.0, 100.0);
        let mut p = particle(-5.0, 50.0, 0.1, 0.0);
        p.advance(surface);
        assert_eq!(p.vx, 0.1);
        assert!(p.x > -5.0);
    }

    #[test]
    fn link_alpha_falls_linearly() {
        let cfg = HeroConfig::default();
        assert_eq!(link_alpha(0.0, &cfg), Some(0.15));
        assert!((link_alpha(75.0, &cfg).unwrap() - 0.075).abs() < 1e-12);
        assert_eq!(link_alpha(150.0, &cfg), None);
        assert_eq!(link_alpha(200.0, &cfg), None);
    }

    #[test]
    fn links_cover_each_close_pair_once() {
        let cfg = HeroConfig::default();
        let field = ParticleField::from_particles(
            Surface::new(800.0, 600.0),
            vec![
                particle(0.0, 0.0, 0.0, 0.0),
                particle(30.0, 40.0, 0.0, 0.0),
                particle(700.0, 500.0, 0.0, 0.0),
            ],
        );
        let links = field.links(&cfg);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].from, (0.0, 0.0));
        assert_eq!(links[0].to, (30.0, 40.0));
        assert!((links[0].alpha - (1.0 - 50.0 / 150.0) * 0.15).abs() < 1e-12);
    }
}
