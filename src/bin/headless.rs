//! Headless integrator run: generate the default scenario, step it N times
//! and print where every body ended up relative to its orbit guide. Handy for
//! checking integrator drift without opening a window.

use orrery_core::constants::DEFAULT_SEED;
use orrery_physics::{procgen, Body};

fn main() {
    let steps: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(600);

    let scenario = procgen::default_scenario(DEFAULT_SEED);
    let center = scenario.center();
    let dt = scenario.step_dt();

    let mut bodies: Vec<Body> = scenario
        .planets
        .iter()
        .map(|spec| Body::from_spec(spec, scenario.sun.mass, center, scenario.common_hue))
        .collect();

    eprintln!(
        "Integrating {} bodies for {} steps (dt = {:.4})...",
        bodies.len(),
        steps,
        dt
    );

    for _ in 0..steps {
        for body in &mut bodies {
            body.step(scenario.sun.mass, center, dt);
        }
    }

    println!(
        "{:<6} {:>10} {:>10} {:>10} {:>10}",
        "name", "x", "y", "r", "drift"
    );
    for body in &bodies {
        let dx = body.position[0] - center[0];
        let dy = body.position[1] - center[1];
        let r = (dx * dx + dy * dy).sqrt();
        println!(
            "{:<6} {:>10.2} {:>10.2} {:>10.2} {:>+10.2}",
            body.name,
            body.position[0],
            body.position[1],
            r,
            r - body.orbit_radius
        );
    }
}
