//! Validation failures and their diagnostic context.
//!
//! Errors are created at the failure site, carry the absolute byte offset and
//! a bounded snippet of the input at that offset, and are never mutated. The
//! first failure anywhere aborts the whole validation.

use alloc::string::String;
use core::fmt;

use bstr::ByteSlice;
use thiserror::Error;

/// Bytes considered when building a context snippet.
const SNIPPET_WINDOW_BYTES: usize = 160;

/// Maximum characters kept in a context snippet.
const SNIPPET_MAX_CHARS: usize = 40;

/// Classifies a validation failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A byte appeared where the grammar required something else.
    #[error("invalid JSON syntax")]
    InvalidSyntax,
    /// The input ended while a construct was still open.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A malformed `\`-escape sequence inside a string.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// Container nesting exceeded the configured maximum depth.
    #[error("nesting too deep")]
    NestingTooDeep,
}

/// A single validation failure.
///
/// Carries the [`ErrorKind`], an optional grammar-specific message, the byte
/// offset at which validation stopped, and a bounded excerpt of the input at
/// that offset. The excerpt window is clamped to the bytes actually remaining,
/// so errors near the end of short inputs are safe to construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateError {
    kind: ErrorKind,
    message: Option<&'static str>,
    offset: usize,
    context: String,
}

impl ValidateError {
    /// Builds an error from the failure offset and the bytes remaining there.
    pub(crate) fn at(
        kind: ErrorKind,
        message: Option<&'static str>,
        offset: usize,
        rest: &[u8],
    ) -> Self {
        Self {
            kind,
            message,
            offset,
            context: snippet(rest),
        }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset of the failure within the original input.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Grammar-specific detail, when one was recorded at the failure site.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    /// Bounded excerpt of the input at the failure offset. Empty when the
    /// input ended exactly there.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)?;
        if let Some(message) = self.message {
            write!(f, ": {message}")?;
        }
        if !self.context.is_empty() {
            write!(f, " (near `{}`)", self.context)?;
        }
        Ok(())
    }
}

impl core::error::Error for ValidateError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Lossy-decodes a clamped window of the remaining input.
///
/// The window is clamped to `rest.len()` before slicing, then truncated to at
/// most [`SNIPPET_MAX_CHARS`] characters after decoding.
fn snippet(rest: &[u8]) -> String {
    let window = &rest[..rest.len().min(SNIPPET_WINDOW_BYTES)];
    window
        .to_str_lossy()
        .chars()
        .take(SNIPPET_MAX_CHARS)
        .collect()
}
