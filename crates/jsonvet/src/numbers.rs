//! JSON number grammar validation.
//!
//! Numbers are validated syntactically only and never converted, so overflow
//! and precision are non-issues here. The grammar is the standard JSON
//! production: optional `-`, an integer part that is a single `0` or a
//! nonzero digit followed by a digit run, an optional fraction, and an
//! optional exponent.

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ValidateError},
};

/// Validates a complete number, positioned at the sign or first digit.
///
/// A digit run that extends to the very end of the input completes the
/// number; end of input is a valid terminator.
pub(crate) fn validate_number(cur: &mut Cursor<'_>) -> Result<(), ValidateError> {
    if cur.first()? == b'-' {
        cur.bump()?;
    }

    match cur.first()? {
        // A leading zero is a complete integer part; `01` leaves the `1` for
        // the surrounding context to reject.
        b'0' => cur.bump()?,
        b'1'..=b'9' => {
            cur.eat_while(|b| b.is_ascii_digit());
        }
        _ => {
            return Err(cur.fail_with(ErrorKind::InvalidSyntax, "expected '-' or a digit (0-9)"));
        }
    }

    if cur.first_opt() == Some(b'.') {
        cur.bump()?;
        require_digit_run(cur)?;
    }

    if matches!(cur.first_opt(), Some(b'e' | b'E')) {
        cur.bump()?;
        if matches!(cur.first_opt(), Some(b'+' | b'-')) {
            cur.bump()?;
        }
        require_digit_run(cur)?;
    }

    Ok(())
}

/// Requires at least one digit, then consumes the maximal digit run.
fn require_digit_run(cur: &mut Cursor<'_>) -> Result<(), ValidateError> {
    if !cur.first()?.is_ascii_digit() {
        return Err(cur.fail_with(ErrorKind::InvalidSyntax, "expected a digit (0-9)"));
    }
    cur.eat_while(|b| b.is_ascii_digit());
    Ok(())
}
