pub mod pipeline;
pub mod system;

pub use system::SystemState;
