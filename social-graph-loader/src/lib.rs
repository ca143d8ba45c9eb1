//! # Social Graph Loader
//! Reads the people CSV, parses its list-valued columns, and hands the
//! resulting records to a `SocialGraphRepository`.
pub mod errors;
pub mod literal;
pub mod loader;
pub mod reader;

pub use errors::{LiteralError, LoaderError};
pub use loader::SocialGraphLoader;
pub use reader::{read_records, read_records_from_path};
