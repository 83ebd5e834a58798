//! Greedy line fitting.
//!
//! [`fill`] assembles one output line at a time from an in-progress fragment
//! and the raw line source, filling each line as far as the width allows
//! before breaking at whitespace.

use super::prefix::PrefixPattern;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn is_break_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Build one output line no longer than `width` characters from `fragment`,
/// pulling further raw lines from `source` as needed.
///
/// Returns the finished line together with the text carried into the next
/// call. A `None` carry-over means the paragraph ended here: a blank line or
/// the end of the source was reached, and the returned line is the final
/// line of the paragraph, verbatim. `Some("")` means the paragraph continues
/// with nothing carried over. The two are distinct states and must not be
/// conflated: `None` stops the filling loop, `Some("")` keeps it running.
///
/// A single token of `width` or more characters is placed on its own line
/// rather than split mid-token, so such a line may exceed the width.
pub(crate) fn fill(
    mut fragment: String,
    source: &mut impl Iterator<Item = String>,
    width: usize,
    pattern: &PrefixPattern,
) -> (String, Option<String>) {
    loop {
        while char_len(&fragment) < width {
            let Some(raw) = source.next() else {
                return (fragment, None);
            };
            let line = pattern.strip_once(raw.trim_end());
            if line.is_empty() {
                return (fragment, None);
            }
            if fragment.is_empty() {
                fragment = line;
            } else {
                fragment.push(' ');
                fragment.push_str(&line);
            }
        }

        let chars: Vec<char> = fragment.chars().collect();
        if chars.len() == width {
            return (fragment, Some(String::new()));
        }

        // Break at the last space or tab within the width. If none exists,
        // the line starts with an over-width token: scan forward for the
        // next break opportunity and let the token overflow on its own line.
        let split = (1..=width)
            .rev()
            .find(|&i| is_break_space(chars[i]))
            .unwrap_or_else(|| {
                let mut i = width + 1;
                while i < chars.len() && !is_break_space(chars[i]) {
                    i += 1;
                }
                i
            });

        let line: String = chars[..split].iter().collect();
        let line = line.trim_end().to_string();
        let rest: String = chars[split..].iter().collect();
        let rest = rest.trim_start().to_string();

        // The break was too conservative if the first word of the carry-over
        // would still have fit; merge the pieces back and refit.
        let next_word = rest.chars().take_while(|&c| !is_break_space(c)).count();
        if char_len(&line) + next_word < width {
            fragment = format!("{line} {rest}");
            continue;
        }
        return (line, Some(rest));
    }
}
