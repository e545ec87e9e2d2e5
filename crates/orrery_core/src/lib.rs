pub mod color;
pub mod config;
pub mod constants;

pub use config::{BodySpec, Scenario, SunConfig, TimeConfig, WindowConfig};
pub use constants::*;
