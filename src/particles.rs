//! Ambient particle network drawn behind the page.
//!
//! Each frame clears the surface, moves every particle (bouncing off the
//! frame edges), draws them as discs and joins each close pair with a line
//! that fades out towards `link_distance`. The proximity pass visits every
//! unordered pair once, so it costs N·(N−1)/2 checks per frame.

use rand::Rng;

use crate::config::ParticleConfig;
use crate::schedule::{Cadence, Scheduled};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    /// Moves by one velocity step and flips any axis that left `[0, bound]`.
    pub fn update(&mut self, bounds: Bounds) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x > bounds.width || self.x < 0.0 {
            self.vx = -self.vx;
        }
        if self.y > bounds.height || self.y < 0.0 {
            self.vy = -self.vy;
        }
    }

    pub fn distance(&self, other: &Particle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A proximity line between particles `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f64,
}

pub trait DrawSurface {
    fn clear(&mut self, bounds: Bounds);
    fn fill_disc(&mut self, x: f64, y: f64, radius: f64, color: &str);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str);
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
    config: ParticleConfig,
}

impl ParticleField {
    pub fn spawn<R: Rng>(config: ParticleConfig, bounds: Bounds, rng: &mut R) -> Self {
        if config.exceeds_pair_budget() {
            log::warn!(
                "{} particles means {} proximity checks per frame",
                config.count,
                config.pair_checks()
            );
        }
        let particles = (0..config.count)
            .map(|_| Particle {
                x: rng.gen::<f64>() * bounds.width,
                y: rng.gen::<f64>() * bounds.height,
                radius: rng.gen::<f64>() * config.max_radius,
                vx: (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed,
                vy: (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed,
            })
            .collect();
        Self {
            particles,
            bounds,
            config,
        }
    }

    pub fn from_particles(config: ParticleConfig, bounds: Bounds, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            bounds,
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// New viewport size; particles keep their positions and bounce back in.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.update(bounds);
        }
    }

    /// Every unordered pair closer than `link_distance`, each reported once.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let max = self.config.link_distance;
        self.particles.iter().enumerate().flat_map(move |(a, p)| {
            self.particles[a + 1..]
                .iter()
                .enumerate()
                .filter_map(move |(k, q)| {
                    let d = p.distance(q);
                    (d < max).then(|| Link {
                        a,
                        b: a + 1 + k,
                        alpha: 1.0 - d / max,
                    })
                })
        })
    }

    /// One animation frame: clear, advance, draw discs, draw links.
    pub fn frame<D: DrawSurface + ?Sized>(&mut self, surface: &mut D) {
        surface.clear(self.bounds);
        self.step();

        let fill = self.config.rgba(self.config.fill_alpha);
        for p in &self.particles {
            surface.fill_disc(p.x, p.y, p.radius, &fill);
        }

        for link in self.links() {
            let (p, q) = (&self.particles[link.a], &self.particles[link.b]);
            surface.stroke_line(
                (p.x, p.y),
                (q.x, q.y),
                self.config.line_width,
                &self.config.rgba(link.alpha),
            );
        }
    }
}

/// A field bound to the surface it draws on, ticking once per redraw.
pub struct Animation<D> {
    pub field: ParticleField,
    pub surface: D,
}

impl<D: DrawSurface> Scheduled for Animation<D> {
    fn tick(&mut self) -> Cadence {
        self.field.frame(&mut self.surface);
        Cadence::NextFrame
    }
}
