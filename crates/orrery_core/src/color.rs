//! Density-driven color derivation.
//!
//! Every body shares one hue; physical density maps to saturation, so denser
//! bodies read as more vivid while the palette stays consistent. Pure
//! functions of their inputs, kept free of any render state.

use crate::constants::{
    COLOR_VALUE, DENSITY_MAX, DENSITY_MIN, SATURATION_MAX, SATURATION_MIN,
};

/// Map density onto the clamped saturation band
pub fn saturation_for_density(density: f64) -> f64 {
    let s = (density - DENSITY_MIN) / (DENSITY_MAX - DENSITY_MIN);
    s.clamp(SATURATION_MIN, SATURATION_MAX)
}

/// RGB for a body of the given density under the shared hue
pub fn body_color(hue: f64, density: f64) -> [u8; 3] {
    hsv_to_rgb(hue, saturation_for_density(density), COLOR_VALUE)
}

/// HSV → RGB, hue wrapping in [0,1), channels truncated (not rounded) to 0–255
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, q, t),
    };

    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}
