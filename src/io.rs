//! File helpers for rewriting documents in place.

use std::{fs, path::Path};

use crate::{line_ending::LineEnding, options::WrapOptions, wrap::wrap_lines};

/// Rewrite a file in place with re-flowed content.
///
/// The file's newline convention is preserved and the output always ends
/// with a final newline.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, options: &WrapOptions, comment_token: &str) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    let eol = LineEnding::detect(&text);
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    let wrapped = wrap_lines(&lines, options, comment_token);
    fs::write(path, wrapped.join(eol.as_str()) + eol.as_str())
}
