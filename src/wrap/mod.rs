//! Greedy paragraph reflow.
//!
//! Text is re-flowed one paragraph at a time: lines are joined with single
//! spaces and refilled to the target width, breaking at spaces and tabs.
//! Blank lines separate paragraphs and survive one-for-one in the output.
//!
//! The leading whitespace (and, when enabled, the comment leader) of the
//! first paragraph is detected once per operation and re-applied to every
//! subsequent output line, including later paragraphs whose own raw
//! indentation differs. Applying one consistent prefix across a whole
//! multi-paragraph selection is deliberate; callers wanting per-paragraph
//! indentation should wrap each paragraph separately.

mod builder;
mod prefix;
mod scanner;


use builder::fill;
pub use prefix::Prefix;
use prefix::PrefixPattern;
use scanner::{Scan, scan_raw, scan_stripped};

use crate::options::WrapOptions;

#[derive(Clone, Copy)]
enum State {
    /// Skipping leading blank lines, emitting one blank output per pull.
    ParagraphStart,
    /// Producing wrapped lines; an empty fragment slot means a paragraph gap.
    Filling,
    Done,
}

/// Lazily re-flow a line source to the configured width.
///
/// One output line is produced per [`Iterator::next`] call and no input line
/// is pulled before it is needed, so a caller may stop consuming at any
/// point. The output is never empty: a source with no content yields a
/// single blank line.
pub struct WrapLines<I: Iterator<Item = String>> {
    source: I,
    pattern: PrefixPattern,
    wrap_column: usize,
    apply_indent: bool,
    width: usize,
    leading: String,
    is_comment: bool,
    fragment: Option<String>,
    last_line_filled: bool,
    state: State,
}

impl<I: Iterator<Item = String>> WrapLines<I> {
    /// Create a wrap operation over `source`.
    ///
    /// A `wrap_column` below 1 is treated as 1 rather than rejected.
    pub fn new(source: I, options: &WrapOptions, comment_token: &str) -> Self {
        let wrap_column = options.wrap_column.max(1);
        Self {
            source,
            pattern: PrefixPattern::new(options, comment_token),
            wrap_column,
            apply_indent: options.indent,
            width: wrap_column,
            leading: String::new(),
            is_comment: false,
            fragment: None,
            last_line_filled: false,
            state: State::ParagraphStart,
        }
    }

    /// The line emitted for each pull made while bridging a paragraph gap.
    fn gap_line(&self) -> String {
        if self.is_comment {
            self.leading.clone()
        } else {
            String::new()
        }
    }

    /// Detect the prefix from the first content line and, for indented
    /// content, emit the first output line of the operation.
    fn start_paragraphs(&mut self, first: &str) -> Option<String> {
        let prefix = self.pattern.detect(first);
        self.is_comment = prefix.is_comment;
        let fragment = self.pattern.strip_once(first);
        self.state = State::Filling;
        if prefix.text.is_empty() {
            self.fragment = Some(fragment);
            return None;
        }

        // The first line keeps its own prefix; the width available to it
        // shrinks accordingly, clamped so at least one column remains.
        let first_width = self
            .wrap_column
            .saturating_sub(prefix.text.chars().count())
            .max(1);
        let (line, rest) = fill(fragment, &mut self.source, first_width, &self.pattern);
        self.last_line_filled = !line.is_empty();
        self.fragment = rest;
        if self.apply_indent {
            self.width = first_width;
            self.leading = prefix.text.clone();
        }
        Some(format!("{}{line}", prefix.text))
    }
}

impl<I: Iterator<Item = String>> Iterator for WrapLines<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.state {
                State::ParagraphStart => match scan_raw(&mut self.source) {
                    Scan::Blank => return Some(String::new()),
                    Scan::Exhausted => {
                        self.state = State::Done;
                        return Some(String::new());
                    }
                    Scan::Content(first) => {
                        if let Some(line) = self.start_paragraphs(&first) {
                            return Some(line);
                        }
                    }
                },
                State::Filling => {
                    if let Some(frag) = self.fragment.take() {
                        let (line, rest) = fill(frag, &mut self.source, self.width, &self.pattern);
                        self.fragment = rest;
                        self.last_line_filled = !line.is_empty();
                        if line.is_empty() {
                            // A truly empty continuation line carries no
                            // leading, even inside an indented block.
                            return Some(String::new());
                        }
                        return Some(format!("{}{line}", self.leading));
                    }
                    match scan_stripped(&mut self.source, &self.pattern) {
                        Scan::Exhausted => {
                            self.state = State::Done;
                            if self.last_line_filled {
                                return Some(String::new());
                            }
                            return None;
                        }
                        Scan::Blank => return Some(self.gap_line()),
                        Scan::Content(next) => {
                            // The prefix detected from the first paragraph
                            // stays in force; later paragraphs are not
                            // re-detected.
                            self.fragment = Some(next);
                            return Some(self.gap_line());
                        }
                    }
                }
                State::Done => return None,
            }
        }
    }
}

/// Re-flow `lines` to the configured width.
///
/// The eager counterpart of [`WrapLines`]. Blank input lines correspond
/// one-for-one to blank (or prefix-only, inside a comment block) output
/// lines, and a trailing blank line is appended when the source ends on a
/// non-blank wrapped line.
#[must_use]
pub fn wrap_lines(lines: &[String], options: &WrapOptions, comment_token: &str) -> Vec<String> {
    WrapLines::new(lines.iter().cloned(), options, comment_token).collect()
}
