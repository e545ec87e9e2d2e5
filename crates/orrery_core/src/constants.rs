// Physical constants (simulation-scaled units)
// Distances are screen pixels and time is seconds; masses are scaled so
// that G = 1.0 keeps orbital speeds in comfortable f64 ranges.

/// Gravitational constant in simulation units
pub const G: f64 = 1.0;

/// Guard for the circular-orbit speed of a degenerate zero-radius orbit
pub const ORBIT_EPSILON: f64 = 1e-6;

/// Softening added to the center distance to avoid the r = 0 singularity
pub const RADIUS_SOFTENING: f64 = 1e-9;

/// Default seed for generated scenarios
pub const DEFAULT_SEED: u64 = 42;

/// Density range mapped onto color saturation
pub const DENSITY_MIN: f64 = 1.0;
pub const DENSITY_MAX: f64 = 12.0;

/// Saturation clamp bounds and the fixed HSV value channel
pub const SATURATION_MIN: f64 = 0.05;
pub const SATURATION_MAX: f64 = 0.98;
pub const COLOR_VALUE: f64 = 0.90;

/// Neutral gray for the decorative orbit guide circles
pub const GUIDE_COLOR: [u8; 3] = [90, 90, 95];

/// Bodies at or above this radius keep the long trail (and render it)
pub const TRAIL_RADIUS_THRESHOLD: u32 = 5;

/// Trail capacity for large and small bodies
pub const TRAIL_CAP_LARGE: usize = 120;
pub const TRAIL_CAP_SMALL: usize = 60;
