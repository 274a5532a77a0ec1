//! Line-oriented parser for the INI-style format.
//!
//! Parsing never fails.  Each line is classified on its own by
//! [`classify_line`]; anything that is not a header or a `key=value` entry
//! is skipped without touching the configuration built so far.

use std::io::BufRead;

use tracing::{trace, warn};

use crate::format::{trim_ascii_ws, COMMENT_MARKERS, KEY_VALUE_SEPARATOR};
use crate::store::config::{Config, DEFAULT_SECTION};

/// What a single (already split) line of input means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty after trimming.
    Blank,
    /// Starts with `#` or `;`.
    Comment,
    /// `[name]`; the name is taken verbatim from between the brackets.
    Header(&'a str),
    /// `key=value`, both trimmed.
    Entry { key: &'a str, value: &'a str },
    /// Neither a header nor contains `=`; ignored.
    Unrecognized,
}

/// Classifies one line of input.
///
/// # Examples
///
/// ```rust
/// use pup_core::format::{classify_line, Line};
///
/// assert_eq!(classify_line("  [dog]  "), Line::Header("dog"));
/// assert_eq!(
///     classify_line(" hp = 10 "),
///     Line::Entry { key: "hp", value: "10" }
/// );
/// assert_eq!(classify_line("; note"), Line::Comment);
/// ```
pub fn classify_line(raw: &str) -> Line<'_> {
    let line = trim_ascii_ws(raw);

    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with(COMMENT_MARKERS) {
        return Line::Comment;
    }
    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        return Line::Header(&line[1..line.len() - 1]);
    }

    match line.split_once(KEY_VALUE_SEPARATOR) {
        Some((key, value)) => Line::Entry {
            key: trim_ascii_ws(key),
            value: trim_ascii_ws(value),
        },
        None => Line::Unrecognized,
    }
}

/// Incremental parser state: the configuration so far and the section that
/// new entries land in.
struct ParseState {
    config: Config,
    current_section: String,
}

impl ParseState {
    fn new() -> Self {
        Self {
            config: Config::new(),
            current_section: DEFAULT_SECTION.to_string(),
        }
    }

    fn feed(&mut self, raw: &str) {
        match classify_line(raw) {
            Line::Blank | Line::Comment => {}
            Line::Header(name) => self.current_section = name.to_string(),
            Line::Entry { key, value } => {
                self.config.edit(self.current_section.as_str(), key, value);
            }
            Line::Unrecognized => trace!("ignoring unrecognized config line: {raw:?}"),
        }
    }
}

/// Parses a whole document held in memory.
pub fn parse_str(text: &str) -> Config {
    let mut state = ParseState::new();
    for line in text.lines() {
        state.feed(line);
    }
    state.config
}

/// How [`feed_lines`] treats a line that is not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Utf8Policy {
    /// Substitute U+FFFD and log the line number.
    Replace,
    /// Fail with [`std::io::ErrorKind::InvalidData`].
    Reject,
}

/// Parses a document line by line from `reader`.
///
/// Lines that are not valid UTF-8 are decoded lossily, with a warning naming
/// the line.  Saving such a config rewrites those bytes as U+FFFD.  If the
/// reader fails part-way through, parsing stops and the entries read so far
/// are returned.
pub fn parse_reader<R: BufRead>(reader: R) -> Config {
    let mut state = ParseState::new();
    if let Err(e) = feed_lines(reader, &mut state, Utf8Policy::Replace) {
        warn!("config read stopped early: {e}");
    }
    state.config
}

/// Like [`parse_reader`], but any failure discards the partial result and
/// is returned to the caller.
///
/// # Errors
///
/// Returns an error of kind [`std::io::ErrorKind::InvalidData`] for the
/// first line that is not valid UTF-8, and otherwise the first I/O error
/// reported by `reader` other than [`std::io::ErrorKind::Interrupted`].
pub fn try_parse_reader<R: BufRead>(reader: R) -> std::io::Result<Config> {
    let mut state = ParseState::new();
    feed_lines(reader, &mut state, Utf8Policy::Reject)?;
    Ok(state.config)
}

fn feed_lines<R: BufRead>(
    mut reader: R,
    state: &mut ParseState,
    policy: Utf8Policy,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut line_no = 0_usize;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return Ok(()),
            Ok(_) => {
                line_no += 1;
                match std::str::from_utf8(&buf) {
                    Ok(line) => state.feed(line),
                    Err(e) if policy == Utf8Policy::Reject => {
                        return Err(std::io::Error::new(
                            std::io::ErrorKind::InvalidData,
                            format!("line {line_no} is not valid UTF-8: {e}"),
                        ));
                    }
                    Err(_) => {
                        warn!("line {line_no}: invalid UTF-8 replaced with U+FFFD");
                        state.feed(&String::from_utf8_lossy(&buf));
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
