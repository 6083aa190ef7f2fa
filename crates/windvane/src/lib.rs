pub mod animator;
pub mod config;
pub mod latch;
pub mod prelude;
pub mod sample;
pub mod sequence;
pub mod state;

pub use config::WindvaneConfig;
