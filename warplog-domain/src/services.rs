// Domain services: the derivation core
pub mod aggregator;
pub mod catalog;
pub mod classifier;
pub mod daily_timeline;
pub mod normalizer;
pub mod pity_engine;
pub mod resolver;

pub use aggregator::*;
pub use catalog::*;
pub use classifier::*;
pub use daily_timeline::*;
pub use normalizer::*;
pub use pity_engine::*;
pub use resolver::*;
