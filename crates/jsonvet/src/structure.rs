//! Composite grammar: the value dispatcher and the object/array validators.
//!
//! Recursive descent maps input nesting directly onto call-stack depth, so
//! every object or array entered spends one unit of the caller-supplied depth
//! budget; when it reaches zero the validation fails with
//! [`ErrorKind::NestingTooDeep`] instead of risking stack exhaustion on
//! hostile input.

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ValidateError},
    numbers::validate_number,
    strings::validate_string,
};

/// Validates any JSON value, dispatching on the first significant byte.
pub(crate) fn validate_value(cur: &mut Cursor<'_>, depth: usize) -> Result<(), ValidateError> {
    match cur.first()? {
        b'"' => validate_string(cur),
        b'{' => validate_object(cur, depth),
        b'[' => validate_array(cur, depth),
        b't' => validate_literal(cur, b"true", "expected the literal 'true'"),
        b'f' => validate_literal(cur, b"false", "expected the literal 'false'"),
        b'n' => validate_literal(cur, b"null", "expected the literal 'null'"),
        b'-' | b'0'..=b'9' => validate_number(cur),
        _ => Err(cur.fail_with(
            ErrorKind::InvalidSyntax,
            "expected a value: '\"', '{', '[', 't', 'f', 'n', '-', or a digit (0-9)",
        )),
    }
}

/// `{` (ws) (member (`,` member)*)? (ws) `}` with member = string `:` value.
fn validate_object(cur: &mut Cursor<'_>, depth: usize) -> Result<(), ValidateError> {
    let depth = enter(cur, depth)?;
    expect(cur, b'{', "expected '{'")?;
    cur.skip_whitespace();

    if cur.first()? == b'}' {
        return cur.bump();
    }

    loop {
        validate_string(cur)?;
        cur.skip_whitespace();
        expect(cur, b':', "expected ':' after object key")?;
        cur.skip_whitespace();
        validate_value(cur, depth)?;
        cur.skip_whitespace();

        match cur.first()? {
            b',' => {
                cur.bump()?;
                cur.skip_whitespace();
            }
            b'}' => return cur.bump(),
            _ => return Err(cur.fail_with(ErrorKind::InvalidSyntax, "expected ',' or '}'")),
        }
    }
}

/// `[` (ws) (value (`,` value)*)? (ws) `]`.
fn validate_array(cur: &mut Cursor<'_>, depth: usize) -> Result<(), ValidateError> {
    let depth = enter(cur, depth)?;
    expect(cur, b'[', "expected '['")?;
    cur.skip_whitespace();

    if cur.first()? == b']' {
        return cur.bump();
    }

    loop {
        validate_value(cur, depth)?;
        cur.skip_whitespace();

        match cur.first()? {
            b',' => {
                cur.bump()?;
                cur.skip_whitespace();
            }
            b']' => return cur.bump(),
            _ => return Err(cur.fail_with(ErrorKind::InvalidSyntax, "expected ',' or ']'")),
        }
    }
}

/// Matches a fixed keyword byte-for-byte, advancing exactly past it.
fn validate_literal(
    cur: &mut Cursor<'_>,
    keyword: &'static [u8],
    message: &'static str,
) -> Result<(), ValidateError> {
    for (n, &expected) in keyword.iter().enumerate() {
        if cur.peek(n)? != expected {
            return Err(cur.fail_with(ErrorKind::InvalidSyntax, message));
        }
    }
    cur.advance(keyword.len())
}

/// Requires `expected` as the next byte and consumes it.
fn expect(cur: &mut Cursor<'_>, expected: u8, message: &'static str) -> Result<(), ValidateError> {
    if cur.first()? != expected {
        return Err(cur.fail_with(ErrorKind::InvalidSyntax, message));
    }
    cur.bump()
}

/// Spends one unit of the depth budget on container entry.
fn enter(cur: &Cursor<'_>, depth: usize) -> Result<usize, ValidateError> {
    depth
        .checked_sub(1)
        .ok_or_else(|| cur.fail(ErrorKind::NestingTooDeep))
}
