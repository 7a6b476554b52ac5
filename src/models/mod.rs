pub mod card;
pub mod search;

pub use card::*;
pub use search::*;
