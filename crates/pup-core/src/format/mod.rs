//! The INI-style text format: parsing and rendering.
//!
//! ```text
//! top_level=value        <- belongs to the default ("") section
//!
//! [section_name]
//! key=value
//! ; comment lines start with ';' or '#'
//! ```
//!
//! # Format rules
//!
//! - Each line is trimmed of ASCII whitespace (space, tab, `\r`, `\n`).
//!   Other whitespace, including Unicode spaces, is kept.
//! - Blank lines and lines starting with `#` or `;` are ignored.
//! - `[name]` switches the current section.  The name is taken verbatim
//!   from between the brackets; `[]` selects the default section.
//! - Any other line is split at its *first* `=` into key and value, each
//!   trimmed.  Lines without `=` are ignored.
//! - Nothing is escaped on output, and comments are not preserved.

pub mod parser;
pub mod writer;

pub use parser::{classify_line, parse_reader, parse_str, try_parse_reader, Line};
pub use writer::{render, render_into, Style};

/// Characters stripped from both ends of lines, keys and values.
pub const WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Characters that mark a whole-line comment.
pub const COMMENT_MARKERS: [char; 2] = ['#', ';'];

/// Separator between key and value.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Strips [`WHITESPACE`] from both ends of `s`.
pub(crate) fn trim_ascii_ws(s: &str) -> &str {
    s.trim_matches(WHITESPACE.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_strips_only_the_four_ascii_whitespace_chars() {
        assert_eq!(trim_ascii_ws(" \t key \r\n"), "key");
        // Vertical tab and no-break space are not part of the set.
        assert_eq!(trim_ascii_ws("\x0bkey\x0b"), "\x0bkey\x0b");
        assert_eq!(trim_ascii_ws("\u{a0}key"), "\u{a0}key");
    }
}
