//! Cursor, token matchers and lexical rules

pub mod cursor;
pub mod lexical;
pub mod token;

pub use cursor::Cursor;
pub use lexical::{attribute, attribute_value, chardata, name, Match};
pub use token::{equals, match_char, match_string, maybe_whitespace, optional, whitespace};
