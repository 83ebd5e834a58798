//! Paragraph scanning over the raw line source.
//!
//! The source is pulled one line at a time and each pull is classified as
//! blank, content, or end-of-source. The orchestrator emits exactly one
//! output line per pull while it is looking for the next paragraph, which
//! keeps blank input lines and blank output lines in one-to-one
//! correspondence.

use super::prefix::PrefixPattern;

/// Classification of a single pulled line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Scan {
    /// The pulled line was blank once trimmed (and, at a paragraph gap,
    /// stripped of the prefix).
    Blank,
    /// The pulled line carries content.
    Content(String),
    /// The source has no more lines.
    Exhausted,
}

/// Classify the next raw line without prefix stripping.
///
/// Used while looking for the first content line, before the prefix has been
/// detected. Blankness is judged on the right-trimmed raw line, so a line
/// holding only its own indentation still starts the first paragraph.
pub(crate) fn scan_raw(source: &mut impl Iterator<Item = String>) -> Scan {
    let Some(raw) = source.next() else {
        return Scan::Exhausted;
    };
    let line = raw.trim_end();
    if line.is_empty() {
        Scan::Blank
    } else {
        Scan::Content(line.to_string())
    }
}

/// Classify the next raw line at a paragraph gap.
///
/// The line is right-trimmed and the prefix pattern stripped once before the
/// blank test, so a line holding nothing but indentation or a bare comment
/// leader separates paragraphs rather than starting one.
pub(crate) fn scan_stripped(
    source: &mut impl Iterator<Item = String>,
    pattern: &PrefixPattern,
) -> Scan {
    let Some(raw) = source.next() else {
        return Scan::Exhausted;
    };
    let line = pattern.strip_once(raw.trim_end());
    if line.is_empty() {
        Scan::Blank
    } else {
        Scan::Content(line)
    }
}
