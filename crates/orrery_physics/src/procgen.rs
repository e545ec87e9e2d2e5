//! Seeded generation of the default scenario.
//!
//! The generator is ChaCha8 seeded with a fixed value, and the per-body draw
//! order (density, radius, orbit, phase) is fixed, so two fresh runs produce
//! identical scenarios. Three groups are emitted in order: planets on fixed
//! perturbed rings, moons, then asteroids.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use orrery_core::config::{BodySpec, Scenario, SunConfig, TimeConfig, WindowConfig};

/// Fixed orbit rings for the six planets, perturbed per body by ±10
const PLANET_RINGS: [f64; 6] = [140.0, 210.0, 280.0, 360.0, 420.0, 470.0];

const MOON_COUNT: usize = 6;
const ASTEROID_COUNT: usize = 18;

/// Build the default scenario for the given seed
pub fn default_scenario(seed: u64) -> Scenario {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut planets = Vec::with_capacity(PLANET_RINGS.len() + MOON_COUNT + ASTEROID_COUNT);

    for (i, ring) in PLANET_RINGS.iter().enumerate() {
        let density = rng.gen_range(1.2..12.0);
        planets.push(BodySpec {
            name: format!("P{}", i + 1),
            radius: rng.gen_range(9..=22),
            density,
            orbit_radius: ring + rng.gen_range(-10.0..10.0),
            phase: rng.gen_range(0.0..std::f64::consts::TAU),
        });
    }

    for i in 0..MOON_COUNT {
        let density = rng.gen_range(1.2..12.0);
        planets.push(BodySpec {
            name: format!("M{}", i + 1),
            radius: rng.gen_range(6..=12),
            density,
            orbit_radius: rng.gen_range(170.0..520.0),
            phase: rng.gen_range(0.0..std::f64::consts::TAU),
        });
    }

    for i in 0..ASTEROID_COUNT {
        let density = rng.gen_range(1.2..12.0);
        planets.push(BodySpec {
            name: format!("A{}", i + 1),
            radius: rng.gen_range(2..=4),
            density,
            orbit_radius: rng.gen_range(120.0..520.0),
            phase: rng.gen_range(0.0..std::f64::consts::TAU),
        });
    }

    Scenario {
        window: WindowConfig::default(),
        sun: SunConfig::default(),
        time: TimeConfig::default(),
        common_hue: 0.62,
        planets,
    }
}
