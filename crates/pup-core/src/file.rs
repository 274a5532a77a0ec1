//! File lifecycle: create, load, save and view.
//!
//! The primary functions keep a deliberately forgiving contract:
//!
//! - [`create`] and [`save`] return `false` instead of an error.
//! - [`load`] returns an empty [`Config`] when the file cannot be read;
//!   a missing file simply means "nothing configured yet".
//!
//! Each has a `try_*` twin returning [`StoreResult`] for callers that need
//! to know *why* something failed.  In particular [`try_load`] reports a
//! missing file as [`StoreError::NotFound`], separately from other I/O
//! errors.
//!
//! All I/O is synchronous and unlocked.  Two processes saving the same path
//! race, and the last writer wins.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pup_core::{create, load, save, view};
//!
//! let path = "dog.cfg";
//! assert!(create(path));
//!
//! let mut cfg = load(path);
//! cfg.edit("dog", "name", "Vasilij");
//! cfg.edit("dog", "hp", "10");
//! assert!(save(path, &cfg));
//!
//! println!("{}", view(&cfg));
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::format::{parser, writer, Style};
use crate::store::config::Config;

// ── Create ────────────────────────────────────────────────────────────────────

/// Creates an empty file at `path`, truncating any existing content.
///
/// Returns `false` when the file cannot be opened for writing, for example
/// because the parent directory does not exist.
pub fn create(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match try_create(path) {
        Ok(()) => true,
        Err(e) => {
            warn!("failed to create config file: {e}");
            false
        }
    }
}

/// Creates an empty file at `path`, truncating any existing content.
///
/// Parent directories are not created.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] when a parent directory is missing and
/// [`StoreError::Io`] for any other failure.
pub fn try_create(path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();
    File::create(path).map_err(|e| StoreError::from_io(path, e))?;
    debug!("created empty config file {}", path.display());
    Ok(())
}

// ── Load ──────────────────────────────────────────────────────────────────────

/// Loads and parses the file at `path`.
///
/// Never fails: an unreadable or missing file yields an empty [`Config`].
/// Invalid UTF-8 is replaced with U+FFFD and logged.  Use [`try_load`] to
/// tell those cases apart.
pub fn load(path: impl AsRef<Path>) -> Config {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => {
            let config = parser::parse_reader(BufReader::new(file));
            debug!(
                "loaded {} section(s) from {}",
                config.len(),
                path.display()
            );
            config
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("config file {} absent; starting empty", path.display());
            Config::new()
        }
        Err(e) => {
            warn!(
                "failed to load config; starting empty: {}",
                StoreError::from_io(path, e)
            );
            Config::new()
        }
    }
}

/// Loads and parses the file at `path`, reporting why it could not be read.
///
/// Malformed lines are still skipped silently.  A line that is not valid
/// UTF-8 is an error here, so a config loaded this way never rewrites bytes
/// it could not decode when it is saved again.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] if the file does not exist and
/// [`StoreError::Io`] if it cannot be opened or read, including
/// [`std::io::ErrorKind::InvalidData`] for invalid UTF-8.
pub fn try_load(path: impl AsRef<Path>) -> StoreResult<Config> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| StoreError::from_io(path, e))?;
    let config = parser::try_parse_reader(BufReader::new(file)).map_err(|source| {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(
        "loaded {} section(s) from {}",
        config.len(),
        path.display()
    );
    Ok(config)
}

// ── Save ──────────────────────────────────────────────────────────────────────

/// Writes `config` to `path` in the [`Style::File`] profile, replacing any
/// existing content.
///
/// Returns `false` when the file cannot be opened or written.
pub fn save(path: impl AsRef<Path>, config: &Config) -> bool {
    match try_save(path, config) {
        Ok(()) => true,
        Err(e) => {
            warn!("failed to save config: {e}");
            false
        }
    }
}

/// Writes `config` to `path` in the [`Style::File`] profile.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] when a parent directory is missing and
/// [`StoreError::Io`] for any other write failure.
pub fn try_save(path: impl AsRef<Path>, config: &Config) -> StoreResult<()> {
    let path = path.as_ref();
    let content = writer::render(config, Style::File);
    std::fs::write(path, content).map_err(|e| StoreError::from_io(path, e))?;

    debug!("saved {} section(s) to {}", config.len(), path.display());
    Ok(())
}

// ── View ──────────────────────────────────────────────────────────────────────

/// Renders `config` for display in the [`Style::Display`] profile
/// (`key = value`).
pub fn view(config: &Config) -> String {
    writer::render(config, Style::Display)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
