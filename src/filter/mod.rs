pub mod filter;
pub mod query;
pub mod types;

pub use filter::{apply, matches};
pub use query::parse_filter_spec;
pub use types::FilterSpec;
