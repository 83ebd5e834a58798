//! Line ending detection for in-place rewriting.
//!
//! The wrap engine works on individual lines and never sees newline
//! characters; joining its output is the caller's job. When a file is
//! rewritten in place, the newline convention of the original text is
//! detected up front and re-applied on write.

/// The newline convention used when joining wrapped output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the convention from a source text: any CRLF means CRLF.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// The literal separator for this convention.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}
