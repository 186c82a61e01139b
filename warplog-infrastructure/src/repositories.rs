pub mod banner_catalog_file;
pub mod json_pull_store;

pub use banner_catalog_file::*;
pub use json_pull_store::*;
