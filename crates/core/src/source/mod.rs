//! Record sources - where candidate chains, assets and deployments come from.

mod json_file_source;
mod source_traits;
mod static_source;

pub use json_file_source::{JsonFileSource, ASSETS_FILE, CHAINS_FILE, DEPLOYMENTS_FILE};
pub use source_traits::RecordSource;
pub use static_source::StaticRecordSource;
