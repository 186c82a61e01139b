// Domain value objects
pub mod category;
pub mod identifiers;
pub mod item_kind;
pub mod outcome;
pub mod rarity;

pub use category::*;
pub use identifiers::*;
pub use item_kind::*;
pub use outcome::*;
pub use rarity::*;
