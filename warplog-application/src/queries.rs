pub mod banner_queries;
pub mod catalog_queries;
pub mod pity_queries;
pub mod player_queries;
pub mod pull_queries;
pub mod snapshot;
pub mod stats_queries;
pub mod timeline_queries;
