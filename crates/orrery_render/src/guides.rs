use bevy::math::Isometry2d;
use bevy::prelude::*;

use orrery_core::constants::GUIDE_COLOR;
use orrery_sim::SystemState;

use super::to_world;

/// Trail points are 1-px dots, same as the body color
const TRAIL_POINT_RADIUS: f32 = 1.0;

/// Decorative unfilled circles at each body's configured orbit radius,
/// centered on the sun. Redrawn every frame from the static spec value; the
/// live orbit drifts off the guide as the integrator accumulates error.
pub fn draw_orbit_guides(system: Res<SystemState>, mut gizmos: Gizmos) {
    let [r, g, b] = GUIDE_COLOR;
    let color = Color::srgb_u8(r, g, b);
    for body in &system.bodies {
        gizmos.circle_2d(Isometry2d::IDENTITY, body.orbit_radius as f32, color);
    }
}

/// Bounded position history, oldest first, only for bodies large enough to
/// keep the long trail
pub fn draw_trails(system: Res<SystemState>, mut gizmos: Gizmos) {
    for body in system.bodies.iter().filter(|b| b.leaves_trail()) {
        let [r, g, b] = body.color();
        let color = Color::srgb_u8(r, g, b);
        for point in body.trail() {
            gizmos.circle_2d(
                Isometry2d::from_translation(to_world(*point, system.center)),
                TRAIL_POINT_RADIUS,
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use orrery_core::color::body_color;
    use orrery_core::constants::GUIDE_COLOR;

    #[test]
    fn test_guides_dimmer_than_any_body() {
        // Guides are a fixed near-gray; every body color carries the bright
        // value band, so guides always read as background
        let guide_max = *GUIDE_COLOR.iter().max().unwrap();
        for density in [0.5, 1.2, 6.5, 12.0] {
            let body = body_color(0.62, density);
            let body_max = *body.iter().max().unwrap();
            assert!(guide_max < body_max, "density {}", density);
        }
    }
}
