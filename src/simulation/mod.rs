pub mod engine;
pub use engine::*;

pub mod odds;
pub use odds::*;

pub mod sampler;
pub use sampler::*;

pub mod tally;
pub use tally::*;
