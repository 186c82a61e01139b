// Domain entities
pub mod banner;
pub mod classified;
pub mod import;
pub mod model;
pub mod pity;
pub mod pull;
pub mod stats;
pub mod timeline;

pub use banner::*;
pub use classified::*;
pub use import::*;
pub use model::*;
pub use pity::*;
pub use pull::*;
pub use stats::*;
pub use timeline::*;
