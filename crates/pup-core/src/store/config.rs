//! The in-memory configuration model: sections of key/value strings.
//!
//! A [`Config`] maps section names to [`Section`]s, and a [`Section`] maps
//! keys to raw string values.  The empty section name `""` is the implicit
//! default section that holds entries appearing before any `[header]`.
//!
//! Both levels are backed by [`BTreeMap`], so iteration (and therefore the
//! output of [`crate::save`] and [`crate::view`]) is sorted by name.  The
//! default section always sorts first.
//!
//! Read-only operations ([`Config::get`], [`Config::get_str`],
//! [`Config::section`]) and [`Config::remove`] never create a section as a
//! side effect; only [`Config::edit`] inserts.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::format::{parser, writer, Style};
use crate::store::value::ConfigValue;

/// Name of the implicit section holding entries that precede any header.
pub const DEFAULT_SECTION: &str = "";

// ── Section ───────────────────────────────────────────────────────────────────

/// The key/value entries of one named section.
///
/// Keys are unique; inserting an existing key overwrites its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section {
    entries: BTreeMap<String, String>,
}

impl Section {
    /// Creates an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts or overwrites `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries in the section.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Section {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

/// A complete configuration: section name → [`Section`].
///
/// # Examples
///
/// ```rust
/// use pup_core::Config;
///
/// let mut cfg = Config::new();
/// cfg.edit("dog", "name", "Rex");
/// cfg.edit("dog", "hp", "10");
///
/// assert_eq!(cfg.get("dog", "hp", 0_i32), 10);
/// assert_eq!(cfg.get("dog", "name", String::from("Unknown")), "Rex");
/// assert_eq!(cfg.get("cat", "name", String::from("Unknown")), "Unknown");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    sections: BTreeMap<String, Section>,
}

impl Config {
    /// Creates an empty configuration with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────────

    /// Inserts or overwrites `section.key = value`, creating the section if
    /// it does not exist yet.
    pub fn edit(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key, value);
    }

    /// Removes `key` from `section`.
    ///
    /// Does nothing when either the section or the key is absent.  A section
    /// emptied by this call is kept, so it still renders as a bare header.
    pub fn remove(&mut self, section: &str, key: &str) {
        if let Some(entries) = self.sections.get_mut(section) {
            entries.remove(key);
        }
    }

    /// Removes a whole section, returning it if it existed.
    pub fn remove_section(&mut self, section: &str) -> Option<Section> {
        self.sections.remove(section)
    }

    // ── Typed retrieval ───────────────────────────────────────────────────────

    /// Returns the raw string stored at `section.key`.
    pub fn get_str(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key)
    }

    /// Returns `section.key` converted to `T`, or `fallback` when the entry
    /// is absent or its text does not convert cleanly.
    ///
    /// See [`crate::store::value`] for the conversion rules of each kind.
    /// For `String` the stored text is returned as-is.
    pub fn get<T: ConfigValue>(&self, section: &str, key: &str, fallback: T) -> T {
        self.get_str(section, key)
            .and_then(T::from_config_str)
            .unwrap_or(fallback)
    }

    /// Like [`Config::get`] with `T::default()` as the fallback.
    pub fn get_or_default<T: ConfigValue + Default>(&self, section: &str, key: &str) -> T {
        self.get(section, key, T::default())
    }

    // ── Inspection ────────────────────────────────────────────────────────────

    /// Returns the named section, if present.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Returns `true` when `section.key` exists, regardless of its value.
    pub fn contains_key(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(section)
            .is_some_and(|entries| entries.contains_key(key))
    }

    /// Iterates `(name, section)` pairs in name order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// Iterates every `(section, key, value)` triple.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.sections()
            .flat_map(|(name, s)| s.iter().map(move |(k, v)| (name, k, v)))
    }

    /// Number of sections, including empty ones.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` when the configuration has no sections at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<S, K, V> FromIterator<(S, K, V)> for Config
where
    S: Into<String>,
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, K, V)>>(iter: I) -> Self {
        let mut cfg = Self::new();
        cfg.extend(iter);
        cfg
    }
}

impl<S, K, V> Extend<(S, K, V)> for Config
where
    S: Into<String>,
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (S, K, V)>>(&mut self, iter: I) {
        for (section, key, value) in iter {
            self.edit(section, key, value);
        }
    }
}

impl FromStr for Config {
    type Err = std::convert::Infallible;

    /// Parses INI-style text.  Never fails; unrecognised lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parser::parse_str(s))
    }
}

impl fmt::Display for Config {
    /// Formats with the [`Style::Display`] profile (`key = value`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writer::render_into(self, Style::Display, f)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
