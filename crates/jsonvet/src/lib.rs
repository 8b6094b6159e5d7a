//! Syntax-only JSON validation.
//!
//! `jsonvet` checks whether a byte sequence conforms to the JSON grammar
//! without building a value tree: validation gateways, linters, and pre-flight
//! checks only need pass/fail plus a useful diagnostic, not a parsed value.
//!
//! The whole crate is one recursive-descent grammar engine over a
//! position-tracked byte cursor. Validation is synchronous, allocates only
//! for diagnostic text, and stops at the first failure. Numbers are checked
//! against the grammar but never converted; strings are checked structurally
//! (terminated, no raw control bytes, well-formed escapes) but not decoded.
//!
//! Any JSON value is accepted at the top level, scalars included, with
//! nothing but whitespace permitted around it.
//!
//! ```
//! use jsonvet::{ErrorKind, validate};
//!
//! assert!(validate(br#"{"a": [1, 2.5e-1, null]}"#).is_ok());
//!
//! let err = validate(br#"{"a":}"#).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidSyntax);
//! ```
//!
//! Nesting depth is bounded (default 128 containers) so hostile input cannot
//! exhaust the call stack; see [`ValidatorOptions`].

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod numbers;
mod options;
mod strings;
mod structure;


pub use error::{ErrorKind, ValidateError};
pub use options::ValidatorOptions;

use crate::cursor::Cursor;

/// Validates that `input` is exactly one well-formed JSON value, with default
/// options.
///
/// # Errors
///
/// Returns the first [`ValidateError`] encountered; validation stops there.
pub fn validate(input: impl AsRef<[u8]>) -> Result<(), ValidateError> {
    validate_with_options(input, ValidatorOptions::default())
}

/// Validates that `input` is exactly one well-formed JSON value.
///
/// Leading and trailing JSON whitespace (space, tab, line feed, carriage
/// return) is permitted; any other surrounding content fails. Empty or
/// whitespace-only input fails with [`ErrorKind::UnexpectedEndOfInput`].
///
/// # Errors
///
/// Returns the first [`ValidateError`] encountered; validation stops there.
pub fn validate_with_options(
    input: impl AsRef<[u8]>,
    options: ValidatorOptions,
) -> Result<(), ValidateError> {
    let mut cur = Cursor::new(input.as_ref());

    cur.skip_whitespace();
    structure::validate_value(&mut cur, options.max_depth)?;
    cur.skip_whitespace();

    if cur.is_exhausted() {
        Ok(())
    } else {
        Err(cur.fail_with(
            ErrorKind::InvalidSyntax,
            "extra characters after parsed value",
        ))
    }
}
