use bevy::prelude::*;

use super::system::SystemState;

/// Label for the physics step; render systems order themselves after it so
/// every frame draws the freshly-ticked state
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhysicsTick;

/// Bevy plugin for the physics pipeline: one fixed step per rendered frame.
/// The loop is frame-rate-locked; pacing happens at the end of the frame in
/// the render crate, not here.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, simulation_tick.in_set(PhysicsTick));
    }
}

fn simulation_tick(mut system: ResMut<SystemState>) {
    system.tick();
}
