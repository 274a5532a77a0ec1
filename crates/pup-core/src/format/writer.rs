//! Rendering a [`Config`] back to text.
//!
//! Two output profiles exist:
//!
//! | Profile          | Entry line    | Used by                        |
//! |------------------|---------------|--------------------------------|
//! | [`Style::File`]    | `key=value`   | [`crate::save`]                |
//! | [`Style::Display`] | `key = value` | [`crate::view`], `Display`     |
//!
//! Both put every header on its own line and follow each section with one
//! blank line.  The default section never gets a header; since sections are
//! ordered by name it is always written first, so its entries cannot end up
//! under another section's header when the text is parsed again.

use std::fmt::{self, Write};

use crate::store::config::Config;

/// Output profile for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Compact on-disk form: `key=value`.
    #[default]
    File,
    /// Human-readable form: `key = value`.
    Display,
}

impl Style {
    /// The text placed between a key and its value.
    pub fn separator(self) -> &'static str {
        match self {
            Style::File => "=",
            Style::Display => " = ",
        }
    }
}

/// Renders `config` to a string using `style`.
///
/// # Examples
///
/// ```rust
/// use pup_core::format::{render, Style};
/// use pup_core::Config;
///
/// let mut cfg = Config::new();
/// cfg.edit("dog", "name", "Rex");
///
/// assert_eq!(render(&cfg, Style::File), "[dog]\nname=Rex\n\n");
/// assert_eq!(render(&cfg, Style::Display), "[dog]\nname = Rex\n\n");
/// ```
pub fn render(config: &Config, style: Style) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render_into(config, style, &mut out);
    out
}

/// Renders `config` into any [`fmt::Write`] sink.
///
/// # Errors
///
/// Propagates errors reported by `out`.
pub fn render_into<W: Write>(config: &Config, style: Style, out: &mut W) -> fmt::Result {
    let separator = style.separator();

    for (name, section) in config.sections() {
        if !name.is_empty() {
            writeln!(out, "[{name}]")?;
        }
        for (key, value) in section.iter() {
            writeln!(out, "{key}{separator}{value}")?;
        }
        out.write_char('\n')?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
