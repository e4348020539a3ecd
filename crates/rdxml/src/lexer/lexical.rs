//! Lexical rules: names, character data and attributes

use crate::error::{Error, Expected, Result};
use crate::lexer::cursor::Cursor;
use crate::lexer::token::{equals, match_char};

/// Successful match of a rule: the advanced cursor and the produced value
pub type Match<'a, T> = (Cursor<'a>, T);

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '_' | ':')
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_alphanumeric() || matches!(c, '.' | '-')
}

/// Element or attribute name
pub fn name(cursor: Cursor<'_>) -> Result<Match<'_, String>> {
    if !cursor.current().is_some_and(is_name_start) {
        return Err(Error::mismatch(Expected::Category("name"), cursor.position()));
    }

    let mut cur = cursor.advance();
    while cur.current().is_some_and(is_name_char) {
        cur = cur.advance();
    }
    Ok((cur, cur.since(&cursor).to_string()))
}

/// Character data up to the next `<`. Empty character data is a mismatch.
pub fn chardata(cursor: Cursor<'_>) -> Result<Match<'_, String>> {
    match cursor.current() {
        None | Some('<') => {
            return Err(Error::mismatch(
                Expected::Category("chardata"),
                cursor.position(),
            ))
        }
        Some(_) => {}
    }

    let mut cur = cursor.advance();
    while cur.current().is_some_and(|c| c != '<') {
        cur = cur.advance();
    }
    Ok((cur, cur.since(&cursor).to_string()))
}

/// Quoted attribute value, either `"..."` or `'...'`
pub fn attribute_value(cursor: Cursor<'_>) -> Result<Match<'_, String>> {
    let quote = match cursor.current() {
        Some(q @ ('"' | '\'')) => q,
        _ => {
            return Err(Error::mismatch(
                Expected::Category("attribute value"),
                cursor.position(),
            ))
        }
    };

    let start = cursor.advance();
    let mut cur = start;
    while cur.current().is_some_and(|c| c != quote) {
        cur = cur.advance();
    }

    // at the closing quote, or at end of input for an unterminated value
    let value = cur.since(&start).to_string();
    let cur = match_char(cur, quote)?;
    Ok((cur, value))
}

/// `name = "value"` pair
pub fn attribute(cursor: Cursor<'_>) -> Result<Match<'_, (String, String)>> {
    let (cur, key) = name(cursor)?;
    let cur = equals(cur)?;
    let (cur, value) = attribute_value(cur)?;
    Ok((cur, (key, value)))
}
