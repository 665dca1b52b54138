pub mod assets;
pub mod config;
pub mod constants;
pub mod engine;
pub mod order;

pub use assets::*;
pub use config::*;
pub use constants::*;
pub use engine::*;
pub use order::*;
