pub mod body;
pub mod procgen;

pub use body::Body;
