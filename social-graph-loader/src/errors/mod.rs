//! Error types for the loader.
mod literal;
mod loader;

pub use literal::LiteralError;
pub use loader::LoaderError;
