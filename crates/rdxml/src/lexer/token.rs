//! Token matchers
//!
//! Atomic grammar rules. Each takes a cursor by value and either returns the
//! cursor advanced past what it matched, or a grammar mismatch. A failed
//! match never affects the caller's cursor.

use crate::error::{Error, Expected, Result};
use crate::lexer::cursor::Cursor;

/// Match exactly the character `c`
pub fn match_char(cursor: Cursor<'_>, c: char) -> Result<Cursor<'_>> {
    if cursor.current() == Some(c) {
        Ok(cursor.advance())
    } else {
        Err(Error::mismatch(Expected::Char(c), cursor.position()))
    }
}

/// Match `literal` as an exact, case-sensitive prefix of the remaining input.
///
/// The error points at the first character that differs.
pub fn match_string<'a>(cursor: Cursor<'a>, literal: &str) -> Result<Cursor<'a>> {
    let mut cur = cursor;
    for c in literal.chars() {
        if cur.current() != Some(c) {
            return Err(Error::mismatch(
                Expected::Literal(literal.to_string()),
                cur.position(),
            ));
        }
        cur = cur.advance();
    }
    Ok(cur)
}

pub(crate) const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Match one or more whitespace characters
pub fn whitespace(cursor: Cursor<'_>) -> Result<Cursor<'_>> {
    match cursor.current() {
        Some(c) if is_whitespace(c) => {}
        _ => {
            return Err(Error::mismatch(
                Expected::Category("whitespace"),
                cursor.position(),
            ))
        }
    }

    let mut cur = cursor.advance();
    while cur.current().is_some_and(is_whitespace) {
        cur = cur.advance();
    }
    Ok(cur)
}

/// Match zero or more whitespace characters. Never fails.
pub fn maybe_whitespace(cursor: Cursor<'_>) -> Cursor<'_> {
    whitespace(cursor).unwrap_or(cursor)
}

/// Match `=` with optional whitespace on either side
pub fn equals(cursor: Cursor<'_>) -> Result<Cursor<'_>> {
    let cur = maybe_whitespace(cursor);
    let cur = match_char(cur, '=')?;
    Ok(maybe_whitespace(cur))
}

/// Run an optional production.
///
/// A grammar mismatch means the construct is absent and becomes `None`.
/// Any other error still propagates.
pub fn optional<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_mismatch() => Ok(None),
        Err(err) => Err(err),
    }
}
