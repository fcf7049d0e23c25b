//! crates/logging/src/message.rs
//! Composed log lines with code and location suffixes resolved before any
//! sink lock is taken.

use std::fmt::Write as _;

use super::levels::Category;

/// Path separator whose doubled occurrences are collapsed in location
/// suffixes. Only backslash-separated platforms produce the doubled form.
#[cfg(windows)]
const SEPARATOR: char = '\\';

/// Source-file location attached to a diagnostic.
///
/// Renders as `" in <path>(Line <n>)"`; the line segment is omitted when
/// the line number is zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceLocation {
    path: String,
    line: u32,
}

impl SourceLocation {
    /// Creates a location from a file path and a one-based line number.
    ///
    /// On backslash-separated platforms, doubled separators in the path are
    /// collapsed to single ones.
    pub fn new(path: impl Into<String>, line: u32) -> Self {
        let path = path.into();
        #[cfg(windows)]
        let path = collapse_doubled(&path, SEPARATOR);
        Self { path, line }
    }

    /// Returns the normalized path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the recorded line number; zero means unknown.
    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// Collapses runs of doubled `separator` characters to single occurrences.
#[cfg_attr(not(windows), allow(dead_code))]
fn collapse_doubled(path: &str, separator: char) -> String {
    let mut out = String::with_capacity(path.len());
    let mut previous_was_separator = false;
    for ch in path.chars() {
        if ch == separator && previous_was_separator {
            continue;
        }
        previous_was_separator = ch == separator;
        out.push(ch);
    }
    out
}

/// Translated status-code suffix, resolved once by the translator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CodeSuffix {
    /// The platform described the code: `": <text> [<code>]"`.
    Described {
        /// System error text, trailing punctuation already stripped.
        text: String,
        /// The raw status code.
        code: i32,
    },
    /// Lookup failed; only the raw code is embedded: `": <code>"`.
    Raw(i32),
}

/// A fully composed log line.
///
/// This is the resolved form of the trailing-argument substitution the
/// upstream C++ daemon deferred to its sinks: the category tag, body text,
/// code suffix, and location suffix are fixed here, and [`render`] produces
/// the final text exactly once before either sink runs. Sinks receive a
/// finished `&str` and know nothing about suffix arity.
///
/// [`render`]: LogMessage::render
#[derive(Clone, Debug)]
pub(crate) struct LogMessage {
    tag: &'static str,
    text: String,
    code: Option<CodeSuffix>,
    location: Option<SourceLocation>,
    /// Capture passthrough: tag plus verbatim text, no suffixes, no
    /// terminator. The capture library formats its own messages.
    bare: bool,
}

impl LogMessage {
    /// Composes a message for the given category.
    ///
    /// Capture-category messages never carry a code or location suffix and
    /// are passed through unmodified except for the tag. An empty location
    /// path is treated as no location.
    pub(crate) fn compose(
        category: Category,
        text: &str,
        code: Option<CodeSuffix>,
        location: Option<SourceLocation>,
    ) -> Self {
        if category == Category::Capture {
            return Self {
                tag: category.tag(),
                text: text.to_owned(),
                code: None,
                location: None,
                bare: true,
            };
        }

        Self {
            tag: category.tag(),
            text: text.to_owned(),
            code,
            location: location.filter(|loc| !loc.path().is_empty()),
            bare: false,
        }
    }

    /// Renders the final line: `"[<Tag>] <text><code><location>.\n"`.
    pub(crate) fn render(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + 32);
        out.push('[');
        out.push_str(self.tag);
        out.push_str("] ");
        out.push_str(&self.text);

        if self.bare {
            return out;
        }

        match &self.code {
            Some(CodeSuffix::Described { text, code }) => {
                let _ = write!(out, ": {text} [{code}]");
            }
            Some(CodeSuffix::Raw(code)) => {
                let _ = write!(out, ": {code}");
            }
            None => {}
        }

        if let Some(location) = &self.location {
            let _ = write!(out, " in {}", location.path());
            if location.line() > 0 {
                let _ = write!(out, "(Line {})", location.line());
            }
        }

        out.push_str(".\n");
        out
    }
}
