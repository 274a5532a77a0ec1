//! # pup-core
//!
//! A small in-memory key/value configuration store backed by INI-style
//! flat files.
//!
//! # Overview (for beginners)
//!
//! A configuration file is a list of `key=value` lines grouped under
//! `[section]` headers:
//!
//! ```text
//! [dog]
//! name=Rex
//! hp=10
//! evil=false
//! ```
//!
//! [`load`] turns such a file into a [`Config`], which you can change with
//! [`Config::edit`] / [`Config::remove`] and query with [`Config::get`].
//! [`save`] writes it back; [`view`] renders it for humans.  Values are
//! always stored as text and converted on demand, so asking for `hp` as an
//! `i32` gives `10`, while asking for `name` as an `i32` gives whatever
//! fallback you supplied.
//!
//! The crate is organised as:
//!
//! - **`store`** – The data model ([`Config`], [`Section`]) and typed
//!   retrieval through the [`ConfigValue`] trait.
//! - **`format`** – The text format: the line parser and the two output
//!   profiles ([`Style::File`] and [`Style::Display`]).
//! - **`file`** – The file lifecycle: [`create`], [`load`], [`save`],
//!   [`view`] and their `try_*` variants.
//!
//! ```rust
//! use pup_core::Config;
//!
//! let cfg: Config = "[dog]\nname=Rex\nhp=10\nevil=false\n".parse().unwrap();
//!
//! assert_eq!(cfg.get("dog", "hp", 0), 10);
//! assert_eq!(cfg.get("dog", "evil", true), false);
//! assert_eq!(cfg.get("dog", "name", String::from("Unknown")), "Rex");
//! ```
//!
//! A [`Config`] is a plain value with no internal locking; wrap it in a
//! `Mutex` to share it between threads.

pub mod error;
pub mod file;
pub mod format;
pub mod store;

// Re-export the whole library surface at the crate root so callers can write
// `pup_core::load` instead of `pup_core::file::load`.
pub use error::{StoreError, StoreResult};
pub use file::{create, load, save, try_create, try_load, try_save, view};
pub use format::Style;
pub use store::{Config, ConfigValue, Section, DEFAULT_SECTION};
