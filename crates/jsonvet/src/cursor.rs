//! Position-tracked cursor over the input buffer.
//!
//! The cursor borrows the full input and tracks an integer offset; advancing
//! increments the offset in O(1) and the unconsumed region is always
//! `&input[offset..]`. One cursor is exclusively owned by one validation call
//! for its full duration.
//!
//! The cursor is also where errors are minted: it knows the failure offset
//! and the remaining bytes, so it attaches a correctly clamped context
//! snippet to every [`ValidateError`] it builds.

use crate::error::{ErrorKind, ValidateError};

/// JSON whitespace per RFC 8259: space, tab, line feed, carriage return.
///
/// Deliberately not a general Unicode space predicate.
#[inline]
pub(crate) fn is_json_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self { input, offset: 0 }
    }

    /// Byte offset of the next unconsumed byte.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.offset
    }

    /// Number of unconsumed bytes.
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.input.len() - self.offset
    }

    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.offset == self.input.len()
    }

    /// Bounds-checked read of the byte `n` positions ahead, without
    /// consuming.
    #[inline]
    pub(crate) fn peek(&self, n: usize) -> Result<u8, ValidateError> {
        self.input
            .get(self.offset + n)
            .copied()
            .ok_or_else(|| self.fail(ErrorKind::UnexpectedEndOfInput))
    }

    /// The next unconsumed byte.
    #[inline]
    pub(crate) fn first(&self) -> Result<u8, ValidateError> {
        self.peek(0)
    }

    /// The next unconsumed byte, or `None` at end of input. Used where end of
    /// input is a legal terminator rather than a failure (number tails, the
    /// driver's exhaustion check).
    #[inline]
    pub(crate) fn first_opt(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    /// Consumes `n` bytes. All `n` must remain.
    #[inline]
    pub(crate) fn advance(&mut self, n: usize) -> Result<(), ValidateError> {
        if self.remaining() < n {
            return Err(self.fail(ErrorKind::UnexpectedEndOfInput));
        }
        self.offset += n;
        Ok(())
    }

    /// Consumes a single byte.
    #[inline]
    pub(crate) fn bump(&mut self) -> Result<(), ValidateError> {
        self.advance(1)
    }

    /// Consumes bytes while `pred` holds, stopping at end of input. Returns
    /// the number of bytes consumed.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.offset;
        while let Some(b) = self.first_opt() {
            if !pred(b) {
                break;
            }
            self.offset += 1;
        }
        self.offset - start
    }

    /// Advances past insignificant JSON whitespace. Idempotent.
    pub(crate) fn skip_whitespace(&mut self) {
        self.eat_while(is_json_whitespace);
    }

    /// The unconsumed suffix of the input.
    #[inline]
    fn rest(&self) -> &'a [u8] {
        &self.input[self.offset..]
    }

    /// Builds an error of `kind` at the current position.
    pub(crate) fn fail(&self, kind: ErrorKind) -> ValidateError {
        ValidateError::at(kind, None, self.position(), self.rest())
    }

    /// Builds an error of `kind` at the current position, with a message.
    pub(crate) fn fail_with(&self, kind: ErrorKind, message: &'static str) -> ValidateError {
        ValidateError::at(kind, Some(message), self.position(), self.rest())
    }
}
