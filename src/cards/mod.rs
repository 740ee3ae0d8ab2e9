pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod hole;
pub use hole::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;
