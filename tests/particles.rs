#![cfg(not(target_arch = "wasm32"))]

use portfolio_wasm::config::ParticleConfig;
use portfolio_wasm::particles::{Animation, Bounds, DrawSurface, Particle, ParticleField};
use portfolio_wasm::schedule::{run_bounded, Cadence, TaskHandle};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const BOUNDS: Bounds = Bounds {
    width: 800.0,
    height: 600.0,
};

fn still(x: f64, y: f64) -> Particle {
    Particle {
        x,
        y,
        vx: 0.0,
        vy: 0.0,
        radius: 1.0,
    }
}

#[derive(Debug, PartialEq)]
enum Op {
    Clear,
    Disc,
    Line(String),
}

#[derive(Default)]
struct Recorder(Vec<Op>);

impl DrawSurface for Recorder {
    fn clear(&mut self, _bounds: Bounds) {
        self.0.push(Op::Clear);
    }

    fn fill_disc(&mut self, _x: f64, _y: f64, _radius: f64, _color: &str) {
        self.0.push(Op::Disc);
    }

    fn stroke_line(&mut self, _from: (f64, f64), _to: (f64, f64), _width: f64, color: &str) {
        self.0.push(Op::Line(color.to_string()));
    }
}

#[test]
fn particle_at_right_edge_bounces_back() {
    let mut p = Particle {
        x: BOUNDS.width,
        y: 300.0,
        vx: 0.2,
        vy: 0.0,
        radius: 1.0,
    };
    p.update(BOUNDS);
    assert_eq!(p.vx, -0.2);

    let before = p.x;
    p.update(BOUNDS);
    assert!(p.x < before);
}

#[test]
fn particle_below_zero_bounces_on_both_axes() {
    let mut p = Particle {
        x: 0.1,
        y: 0.1,
        vx: -0.2,
        vy: -0.2,
        radius: 0.5,
    };
    p.update(BOUNDS);
    assert!(p.vx > 0.0 && p.vy > 0.0);
}

#[test]
fn inside_particles_keep_velocity() {
    let mut p = Particle {
        x: 100.0,
        y: 100.0,
        vx: 0.25,
        vy: -0.1,
        radius: 1.0,
    };
    p.update(BOUNDS);
    assert_eq!((p.vx, p.vy), (0.25, -0.1));
    assert!((p.x - 100.25).abs() < 1e-12);
    assert!((p.y - 99.9).abs() < 1e-12);
}

#[test]
fn spawn_respects_configured_ranges() {
    let config = ParticleConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::spawn(config.clone(), BOUNDS, &mut rng);

    assert_eq!(field.particles().len(), 60);
    for p in field.particles() {
        assert!((0.0..BOUNDS.width).contains(&p.x));
        assert!((0.0..BOUNDS.height).contains(&p.y));
        assert!((0.0..config.max_radius).contains(&p.radius));
        assert!((-0.25..0.25).contains(&p.vx));
        assert!((-0.25..0.25).contains(&p.vy));
    }
}

#[test]
fn links_visit_each_close_pair_once_and_never_self() {
    let field = ParticleField::from_particles(
        ParticleConfig::default(),
        BOUNDS,
        vec![still(0.0, 0.0), still(50.0, 0.0), still(0.0, 99.0), still(500.0, 500.0)],
    );
    let links: Vec<_> = field.links().collect();
    let pairs: Vec<_> = links.iter().map(|l| (l.a, l.b)).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2)]);
    assert!((links[0].alpha - 0.5).abs() < 1e-12);
    assert!((links[1].alpha - 0.01).abs() < 1e-12);
}

#[test]
fn pair_at_threshold_is_not_linked() {
    let field = ParticleField::from_particles(
        ParticleConfig::default(),
        BOUNDS,
        vec![still(0.0, 0.0), still(60.0, 80.0)],
    );
    assert_eq!(field.links().count(), 0);
}

#[test]
fn clustered_field_links_every_unordered_pair() {
    let particles = (0..10).map(|i| still(100.0 + i as f64, 100.0)).collect();
    let field = ParticleField::from_particles(ParticleConfig::default(), BOUNDS, particles);
    assert_eq!(field.links().count(), 45);
}

#[test]
fn frame_clears_then_draws_discs_then_lines() {
    let mut field = ParticleField::from_particles(
        ParticleConfig::default(),
        BOUNDS,
        vec![still(10.0, 10.0), still(10.0, 60.0), still(700.0, 500.0)],
    );
    let mut surface = Recorder::default();
    field.frame(&mut surface);

    assert_eq!(
        surface.0,
        vec![
            Op::Clear,
            Op::Disc,
            Op::Disc,
            Op::Disc,
            Op::Line("rgba(99, 102, 241, 0.5)".to_string()),
        ]
    );
}

#[test]
fn resize_changes_bounds_only() {
    let mut field =
        ParticleField::from_particles(ParticleConfig::default(), BOUNDS, vec![still(700.0, 500.0)]);
    let small = Bounds {
        width: 320.0,
        height: 240.0,
    };
    field.resize(small);
    assert_eq!(field.bounds(), small);
    assert_eq!(field.particles()[0].x, 700.0);
}

#[test]
fn particle_outside_shrunken_frame_flips_on_every_update() {
    let narrow = Bounds {
        width: 320.0,
        height: 240.0,
    };
    let mut p = Particle {
        x: 330.0,
        y: 100.0,
        vx: -0.25,
        vy: 0.0,
        radius: 1.0,
    };

    p.update(narrow);
    assert_eq!(p.x, 329.75);
    assert_eq!(p.vx, 0.25);

    p.update(narrow);
    assert_eq!(p.x, 330.0);
    assert_eq!(p.vx, -0.25);
}

#[test]
fn animation_runs_a_bounded_number_of_frames() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = ParticleConfig {
        count: 5,
        ..ParticleConfig::default()
    };
    let mut animation = Animation {
        field: ParticleField::spawn(config, BOUNDS, &mut rng),
        surface: Recorder::default(),
    };
    let handle = TaskHandle::started();
    let cadences = run_bounded(&mut animation, &handle, 4);

    assert_eq!(cadences, vec![Cadence::NextFrame; 4]);
    let clears = animation.surface.0.iter().filter(|op| **op == Op::Clear).count();
    assert_eq!(clears, 4);

    handle.stop();
    assert!(run_bounded(&mut animation, &handle, 4).is_empty());
}

proptest! {
    #[test]
    fn particles_never_drift_far_outside(seed in any::<u64>(), frames in 1usize..400) {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = ParticleConfig { count: 8, ..ParticleConfig::default() };
        let max_speed = config.max_speed;
        let mut field = ParticleField::spawn(config, BOUNDS, &mut rng);
        for _ in 0..frames {
            field.step();
        }
        for p in field.particles() {
            prop_assert!(p.x >= -2.0 * max_speed && p.x <= BOUNDS.width + 2.0 * max_speed);
            prop_assert!(p.y >= -2.0 * max_speed && p.y <= BOUNDS.height + 2.0 * max_speed);
        }
    }
}
