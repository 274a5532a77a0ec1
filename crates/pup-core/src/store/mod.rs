//! The in-memory store: the [`Config`] data model, its mutation operations
//! and typed retrieval.
//!
//! Nothing in this module touches the file system; see [`crate::file`] for
//! loading and saving.

pub mod config;
pub mod value;

pub use config::{Config, Section, DEFAULT_SECTION};
pub use value::ConfigValue;
