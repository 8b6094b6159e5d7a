//! String body and `\`-escape validation.
//!
//! Strings are checked for structure only: the closing quote must arrive
//! before end of input, raw control bytes are rejected, and every escape must
//! be one of the eight single-character escapes or `\u` plus four hex digits.
//! No decoding happens and surrogate pairing is not checked; that is value
//! semantics, out of scope for a syntax validator.

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ValidateError},
};

/// Raw bytes below this value are control characters, forbidden in strings.
const CONTROL_CHAR_LIMIT: u8 = 0x20;

/// Validates a complete string, positioned at the opening quote, consuming
/// through the closing quote.
pub(crate) fn validate_string(cur: &mut Cursor<'_>) -> Result<(), ValidateError> {
    if cur.first()? != b'"' {
        return Err(cur.fail_with(ErrorKind::InvalidSyntax, "expected '\"'"));
    }
    cur.bump()?;

    loop {
        let b = cur.first()?;
        match b {
            b'"' => return cur.bump(),
            b'\\' => {
                cur.bump()?;
                validate_escape(cur)?;
            }
            _ if b < CONTROL_CHAR_LIMIT => {
                return Err(cur.fail_with(
                    ErrorKind::InvalidSyntax,
                    "control characters (< 0x20) are not allowed in strings",
                ));
            }
            _ => cur.bump()?,
        }
    }
}

/// Validates one escape sequence, positioned just after the backslash.
fn validate_escape(cur: &mut Cursor<'_>) -> Result<(), ValidateError> {
    match cur.first()? {
        b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => cur.bump(),
        b'u' => {
            for n in 1..=4 {
                if !cur.peek(n)?.is_ascii_hexdigit() {
                    return Err(cur.fail_with(
                        ErrorKind::InvalidEscape,
                        "expected `\\u` followed by 4 hexadecimal digits",
                    ));
                }
            }
            cur.advance(5)
        }
        _ => Err(cur.fail_with(
            ErrorKind::InvalidEscape,
            "expected one of '\"' '\\' '/' 'b' 'f' 'n' 'r' 't', or `\\u` and 4 hexadecimal digits",
        )),
    }
}
