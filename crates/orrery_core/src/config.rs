use serde::{Deserialize, Serialize};

/// Complete initial scenario: window, central body, timing and the ordered
/// body list. Loaded (or generated) once at startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub window: WindowConfig,
    pub sun: SunConfig,
    pub time: TimeConfig,
    /// Shared hue for every body; only saturation varies (with density)
    pub common_hue: f64,
    pub planets: Vec<BodySpec>,
}

impl Scenario {
    /// Center of the field in screen coordinates
    pub fn center(&self) -> [f64; 2] {
        [
            (self.window.width / 2) as f64,
            (self.window.height / 2) as f64,
        ]
    }

    /// Effective per-step timestep
    pub fn step_dt(&self) -> f64 {
        self.time.dt * self.time.time_scale
    }
}

/// Window parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    /// Target frame rate; the loop is frame-rate-locked, one physics step per frame
    pub fps: u32,
    pub bg_color: [u8; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            fps: 120,
            bg_color: [36, 36, 38],
        }
    }
}

/// The fixed central mass; not simulated, pinned at the window center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunConfig {
    pub mass: f64,
    pub radius: u32,
    pub color: [u8; 3],
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            mass: 26000.0,
            radius: 20,
            color: [245, 222, 140],
        }
    }
}

/// Base timestep and the multiplier applied to it every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeConfig {
    pub dt: f64,
    pub time_scale: f64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            time_scale: 10.0,
        }
    }
}

/// Persisted per-body parameters. Created once at generation time and never
/// mutated; runtime state lives in `Body`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub name: String,
    /// Draw radius in pixels
    pub radius: u32,
    /// Used only for color derivation
    pub density: f64,
    /// Initial distance from the center; also the orbit guide radius
    pub orbit_radius: f64,
    /// Initial angular position in radians
    pub phase: f64,
}
