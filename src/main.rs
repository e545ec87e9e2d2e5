use std::path::Path;

use bevy::prelude::*;
use bevy::window::PresentMode;
use orrery_render::OrreryRenderPlugin;
use orrery_sim::pipeline::SimulationPlugin;
use orrery_sim::SystemState;

/// Scenario file next to the program; read every run, written only when absent
const SCENARIO_PATH: &str = "initial_state.json";

fn main() -> AppExit {
    let scenario = match orrery_storage::load_or_create(Path::new(SCENARIO_PATH)) {
        Ok(scenario) => scenario,
        Err(err) => {
            // Logging is not up yet at this point
            eprintln!("orrery: {err}");
            return AppExit::error();
        }
    };

    let [r, g, b] = scenario.window.bg_color;
    let state = SystemState::from_scenario(&scenario);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery — Planetary System".into(),
                resolution: (
                    scenario.window.width as f32,
                    scenario.window.height as f32,
                )
                    .into(),
                // Pacing is handled by the FramePacer, not the display
                present_mode: PresentMode::AutoNoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb_u8(r, g, b)))
        .insert_resource(state)
        .add_plugins(SimulationPlugin)
        .add_plugins(OrreryRenderPlugin)
        .run()
}
