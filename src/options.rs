//! Wrap configuration.

/// Default target column, the conventional 80-column right margin.
pub const DEFAULT_WRAP_COLUMN: usize = 80;

/// Options controlling a wrap operation.
///
/// Owned by the caller and read once per invocation; the engine keeps no
/// state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    /// Target output width. Values below 1 are treated as 1.
    pub wrap_column: usize,
    /// Re-apply the detected indentation (and comment leader) to every
    /// output line after the first.
    pub indent: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            wrap_column: DEFAULT_WRAP_COLUMN,
            indent: true,
        }
    }
}
