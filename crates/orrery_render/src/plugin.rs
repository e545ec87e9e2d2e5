use bevy::prelude::*;

use orrery_sim::pipeline::PhysicsTick;

use super::bodies;
use super::guides;
use super::pacing;

/// Main render plugin: camera + circle meshes for sun and bodies, gizmo
/// passes for orbit guides and trails, and end-of-frame pacing.
pub struct OrreryRenderPlugin;

impl Plugin for OrreryRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (bodies::spawn_scene, pacing::init_frame_pacer))
            .add_systems(
                Update,
                (
                    bodies::update_body_transforms,
                    guides::draw_orbit_guides,
                    guides::draw_trails,
                )
                    .after(PhysicsTick),
            )
            .add_systems(Last, pacing::pace_frames);
    }
}
