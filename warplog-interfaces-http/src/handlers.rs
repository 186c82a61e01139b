pub mod catalog_handlers;
pub mod import_handlers;
pub mod ops_handlers;
pub mod player_handlers;

pub use catalog_handlers::*;
pub use import_handlers::*;
pub use ops_handlers::*;
pub use player_handlers::*;
