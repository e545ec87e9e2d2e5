pub mod bodies;
pub mod guides;
pub mod pacing;
pub mod plugin;

pub use plugin::OrreryRenderPlugin;

use bevy::math::Vec2;

/// Map a screen-space point (origin top-left, y down) into Bevy world space
/// (origin at the field center, y up).
pub fn to_world(p: [f64; 2], center: [f64; 2]) -> Vec2 {
    Vec2::new((p[0] - center[0]) as f32, (center[1] - p[1]) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_origin() {
        assert_eq!(to_world([500.0, 500.0], [500.0, 500.0]), Vec2::ZERO);
    }

    #[test]
    fn test_y_axis_flips() {
        // Screen-down is world-down: a point below center lands at negative y
        let w = to_world([500.0, 700.0], [500.0, 500.0]);
        assert_eq!(w, Vec2::new(0.0, -200.0));
    }

    #[test]
    fn test_x_axis_preserved() {
        let w = to_world([740.0, 500.0], [500.0, 500.0]);
        assert_eq!(w, Vec2::new(240.0, 0.0));
    }
}
