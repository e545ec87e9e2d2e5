use bevy::prelude::*;
use orrery_core::{Scenario, SunConfig, WindowConfig};
use orrery_physics::Body;

/// The whole simulated system, tracked as a Bevy Resource.
///
/// Built once from the loaded scenario; bodies are never added or removed
/// during a run. The loop owns all mutation, one tick per rendered frame.
#[derive(Resource)]
pub struct SystemState {
    pub window: WindowConfig,
    pub sun: SunConfig,
    /// Field center in screen coordinates; the sun is pinned here
    pub center: [f64; 2],
    /// Effective per-step timestep (base dt × time scale)
    pub step_dt: f64,
    pub bodies: Vec<Body>,
}

impl SystemState {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let center = scenario.center();
        let bodies = scenario
            .planets
            .iter()
            .map(|spec| Body::from_spec(spec, scenario.sun.mass, center, scenario.common_hue))
            .collect();

        Self {
            window: scenario.window.clone(),
            sun: scenario.sun.clone(),
            center,
            step_dt: scenario.step_dt(),
            bodies,
        }
    }

    /// Advance every body by one timestep. Bodies only read the fixed sun
    /// mass and center, so their relative order is irrelevant.
    pub fn tick(&mut self) {
        for body in &mut self.bodies {
            body.step(self.sun.mass, self.center, self.step_dt);
        }
    }
}
