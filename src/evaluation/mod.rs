pub mod evaluator;
pub use evaluator::*;

pub mod score;
pub use score::*;
