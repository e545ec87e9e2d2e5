use std::collections::VecDeque;

use orrery_core::color::body_color;
use orrery_core::constants::{
    G, ORBIT_EPSILON, RADIUS_SOFTENING, TRAIL_CAP_LARGE, TRAIL_CAP_SMALL,
    TRAIL_RADIUS_THRESHOLD,
};
use orrery_core::BodySpec;

/// Runtime state of one orbiting body.
///
/// Built once from a `BodySpec` plus the scenario-wide sun mass, center and
/// hue. Position and velocity start on a circular orbit and are advanced by
/// `step`; the trail keeps a bounded FIFO of recent positions.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    /// Draw radius in pixels
    pub radius: u32,
    pub density: f64,
    /// Fixed guide-circle radius; the live orbit drifts away from it
    pub orbit_radius: f64,
    pub hue: f64,
    pub position: [f64; 2],
    pub velocity: [f64; 2],
    trail: VecDeque<[f64; 2]>,
    trail_cap: usize,
}

impl Body {
    /// Construct from a spec, placing the body at `phase` radians on its
    /// orbit with the circular-orbit speed, counter-clockwise.
    pub fn from_spec(spec: &BodySpec, sun_mass: f64, center: [f64; 2], hue: f64) -> Self {
        let (sin_phase, cos_phase) = spec.phase.sin_cos();
        let position = [
            center[0] + spec.orbit_radius * cos_phase,
            center[1] + spec.orbit_radius * sin_phase,
        ];

        // v = sqrt(GM/r), guarded so a zero-radius orbit stays finite
        let speed = (G * sun_mass / spec.orbit_radius.max(ORBIT_EPSILON)).sqrt();
        let velocity = [speed * -sin_phase, speed * cos_phase];

        let trail_cap = if spec.radius >= TRAIL_RADIUS_THRESHOLD {
            TRAIL_CAP_LARGE
        } else {
            TRAIL_CAP_SMALL
        };

        Self {
            name: spec.name.clone(),
            radius: spec.radius,
            density: spec.density,
            orbit_radius: spec.orbit_radius,
            hue,
            position,
            velocity,
            trail: VecDeque::with_capacity(trail_cap + 1),
            trail_cap,
        }
    }

    /// One semi-implicit Euler step under the single central mass.
    /// Velocity is updated before position; that ordering is what keeps the
    /// integrator's drift characteristics reproducible.
    pub fn step(&mut self, sun_mass: f64, center: [f64; 2], dt: f64) {
        let dx = center[0] - self.position[0];
        let dy = center[1] - self.position[1];
        let r = (dx * dx + dy * dy).sqrt() + RADIUS_SOFTENING;

        let a = G * sun_mass / (r * r);
        let ax = a * dx / r;
        let ay = a * dy / r;

        self.velocity[0] += ax * dt;
        self.velocity[1] += ay * dt;
        self.position[0] += self.velocity[0] * dt;
        self.position[1] += self.velocity[1] * dt;

        // Exactly one push per step, so one eviction keeps the cap
        self.trail.push_back(self.position);
        if self.trail.len() > self.trail_cap {
            self.trail.pop_front();
        }
    }

    /// Recent positions, oldest first
    pub fn trail(&self) -> impl Iterator<Item = &[f64; 2]> {
        self.trail.iter()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    pub fn trail_cap(&self) -> usize {
        self.trail_cap
    }

    /// Whether the trail is rendered at all
    pub fn leaves_trail(&self) -> bool {
        self.radius >= TRAIL_RADIUS_THRESHOLD
    }

    /// Display color derived from density under the shared hue
    pub fn color(&self) -> [u8; 3] {
        body_color(self.hue, self.density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: [f64; 2] = [500.0, 500.0];
    const SUN_MASS: f64 = 26000.0;

    fn spec(radius: u32, orbit_radius: f64, phase: f64) -> BodySpec {
        BodySpec {
            name: "T".into(),
            radius,
            density: 5.0,
            orbit_radius,
            phase,
        }
    }

    #[test]
    fn test_initial_velocity_perpendicular() {
        for phase in [0.0, 0.7, 1.9, 3.3, 5.9] {
            let b = Body::from_spec(&spec(10, 280.0, phase), SUN_MASS, CENTER, 0.62);
            let rx = b.position[0] - CENTER[0];
            let ry = b.position[1] - CENTER[1];
            let dot = rx * b.velocity[0] + ry * b.velocity[1];
            assert!(dot.abs() < 1e-9, "phase {}: dot = {}", phase, dot);
        }
    }

    #[test]
    fn test_initial_speed_circular() {
        let b = Body::from_spec(&spec(10, 280.0, 1.0), SUN_MASS, CENTER, 0.62);
        let speed = (b.velocity[0] * b.velocity[0] + b.velocity[1] * b.velocity[1]).sqrt();
        let expected = (G * SUN_MASS / 280.0).sqrt();
        assert!((speed - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_zero_orbit_radius_finite() {
        let b = Body::from_spec(&spec(10, 0.0, 0.0), SUN_MASS, CENTER, 0.62);
        let speed = (b.velocity[0] * b.velocity[0] + b.velocity[1] * b.velocity[1]).sqrt();
        assert!(speed.is_finite());
        // GM/epsilon is huge but bounded
        assert!(speed > 1e4);
    }

    #[test]
    fn test_trail_bounded_fifo() {
        let mut large = Body::from_spec(&spec(5, 200.0, 0.0), SUN_MASS, CENTER, 0.62);
        let mut small = Body::from_spec(&spec(4, 200.0, 0.0), SUN_MASS, CENTER, 0.62);
        assert_eq!(large.trail_cap(), 120);
        assert_eq!(small.trail_cap(), 60);
        assert_eq!(large.trail_len(), 0);

        let dt = 10.0 / 60.0;
        for n in 1..=300usize {
            large.step(SUN_MASS, CENTER, dt);
            small.step(SUN_MASS, CENTER, dt);
            assert_eq!(large.trail_len(), n.min(120));
            assert_eq!(small.trail_len(), n.min(60));
        }

        // Newest entry is the live position
        assert_eq!(*large.trail().last().unwrap(), large.position);
    }

    #[test]
    fn test_trail_evicts_oldest_first() {
        let mut b = Body::from_spec(&spec(4, 200.0, 0.0), SUN_MASS, CENTER, 0.62);
        let dt = 10.0 / 60.0;
        b.step(SUN_MASS, CENTER, dt);
        let second = {
            b.step(SUN_MASS, CENTER, dt);
            b.position
        };
        for _ in 0..59 {
            b.step(SUN_MASS, CENTER, dt);
        }
        // 61 pushes against a cap of 60: the first entry is gone
        assert_eq!(b.trail_len(), 60);
        assert_eq!(*b.trail().next().unwrap(), second);
    }

    #[test]
    fn test_single_step_matches_closed_form() {
        // Default-scenario timestep: dt = (1/60) * 10
        let dt = (1.0 / 60.0) * 10.0;
        let s = spec(12, 280.0, 0.9);
        let mut b = Body::from_spec(&s, SUN_MASS, CENTER, 0.62);
        let (p0, v0) = (b.position, b.velocity);

        b.step(SUN_MASS, CENTER, dt);

        let dx = CENTER[0] - p0[0];
        let dy = CENTER[1] - p0[1];
        let r = (dx * dx + dy * dy).sqrt() + 1e-9;
        let a = G * SUN_MASS / (r * r);
        let vx = v0[0] + a * dx / r * dt;
        let vy = v0[1] + a * dy / r * dt;
        let px = p0[0] + vx * dt;
        let py = p0[1] + vy * dt;

        assert!((b.velocity[0] - vx).abs() <= 1e-9 * vx.abs().max(1.0));
        assert!((b.velocity[1] - vy).abs() <= 1e-9 * vy.abs().max(1.0));
        assert!((b.position[0] - px).abs() <= 1e-9 * px.abs().max(1.0));
        assert!((b.position[1] - py).abs() <= 1e-9 * py.abs().max(1.0));
    }

    #[test]
    fn test_semi_implicit_ordering() {
        // Position must advance with the post-update velocity, not the old one
        let dt = 0.5;
        let s = spec(10, 300.0, 0.0);
        let mut b = Body::from_spec(&s, SUN_MASS, CENTER, 0.62);
        let (p0, v0) = (b.position, b.velocity);

        b.step(SUN_MASS, CENTER, dt);

        let explicit_px = p0[0] + v0[0] * dt;
        assert!((b.position[0] - explicit_px).abs() > 1e-6);
    }

    #[test]
    fn test_acceleration_points_inward() {
        let mut b = Body::from_spec(&spec(10, 300.0, 0.0), SUN_MASS, CENTER, 0.62);
        // Body starts due east of center; the velocity kick must point west
        let v0x = b.velocity[0];
        b.step(SUN_MASS, CENTER, 0.1);
        assert!(b.velocity[0] < v0x);
    }

    #[test]
    fn test_orbit_roughly_closes() {
        // One full revolution of a circular orbit should come back near the
        // start; first-order drift is expected but bounded at this step size
        let r0 = 280.0;
        let mut b = Body::from_spec(&spec(10, r0, 0.0), SUN_MASS, CENTER, 0.62);
        let speed = (G * SUN_MASS / r0).sqrt();
        let period = std::f64::consts::TAU * r0 / speed;
        let dt = 1.0 / 60.0;
        let steps = (period / dt) as usize;
        for _ in 0..steps {
            b.step(SUN_MASS, CENTER, dt);
        }
        let dist = ((b.position[0] - CENTER[0] - r0).powi(2)
            + (b.position[1] - CENTER[1]).powi(2))
        .sqrt();
        assert!(dist < r0 * 0.1, "drift after one period: {}", dist);
    }
}
