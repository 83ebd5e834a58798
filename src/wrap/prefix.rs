//! Prefix detection for wrap operations.
//!
//! The prefix is the literal leading substring of the first content line:
//! a run of spaces and tabs, optionally followed by the document's comment
//! leader and any spaces after it. It is detected once per wrap operation
//! and re-applied to every output line for the remainder of that operation.

use std::sync::LazyLock;

use regex::Regex;

use crate::options::WrapOptions;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*").unwrap());

/// The leading text stripped from input lines and re-applied to output lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    /// Literal prefix text, possibly empty.
    pub text: String,
    /// True when the prefix carries an actual comment leader rather than
    /// bare indentation.
    pub is_comment: bool,
}

impl Prefix {
    /// Detect the prefix of a wrap operation from its first content line.
    #[must_use]
    pub fn detect(first_line: &str, options: &WrapOptions, comment_token: &str) -> Self {
        PrefixPattern::new(options, comment_token).detect(first_line)
    }
}

/// Precompiled pattern matching the prefix of every raw line in one wrap
/// operation.
///
/// When indentation is enabled and a comment token is supplied, the pattern
/// accepts leading whitespace optionally followed by the token and trailing
/// spaces. Otherwise it accepts leading whitespace alone.
pub(crate) struct PrefixPattern {
    regex: Regex,
    comment: bool,
}

impl PrefixPattern {
    pub(crate) fn new(options: &WrapOptions, comment_token: &str) -> Self {
        if options.indent && !comment_token.is_empty() {
            let pattern = format!(r"^[ \t]*(?:{} *)?", regex::escape(comment_token));
            Self {
                // The token is escaped, so the pattern always compiles.
                regex: Regex::new(&pattern).unwrap(),
                comment: true,
            }
        } else {
            Self {
                regex: WHITESPACE.clone(),
                comment: false,
            }
        }
    }

    /// The longest prefix of `line` matching the pattern, possibly empty.
    pub(crate) fn matched<'a>(&self, line: &'a str) -> &'a str {
        self.regex.find(line).map_or("", |m| m.as_str())
    }

    /// Remove the matched prefix from the start of `line`, once.
    pub(crate) fn strip_once(&self, line: &str) -> String {
        self.regex.replace(line, "").into_owned()
    }

    pub(crate) fn detect(&self, first_line: &str) -> Prefix {
        let text = self.matched(first_line).to_string();
        let is_comment = self.comment && !text.trim().is_empty();
        Prefix { text, is_comment }
    }
}
