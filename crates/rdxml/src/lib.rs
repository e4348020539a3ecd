//! rdxml - backtracking recursive-descent parser for a small XML dialect
//!
//! The dialect covers an optional `<?xml version="1.0"?>` declaration,
//! nested elements, attributes and character data. Entities, CDATA,
//! comments, namespaces and DOCTYPE are not supported.
//!
//! # Quick Start
//!
//! ```
//! use rdxml::from_str;
//! # fn main() -> Result<(), rdxml::Error> {
//! let doc = from_str(r#"<?xml version="1.0"?><user id="7"><name>John</name></user>"#)?;
//! let root = doc.root.unwrap_or_default();
//! assert_eq!(root.attribute("id"), Some("7"));
//! assert_eq!(root.child("name").map(|n| n.value.as_str()), Some("John"));
//! # Ok(())
//! # }
//! ```
//!
//! The grammar rules are public as well. Each one takes a [`Cursor`] by
//! value and returns the advanced cursor together with what it parsed:
//!
//! ```
//! use rdxml::{lexer, Cursor};
//! # fn main() -> Result<(), rdxml::Error> {
//! let (rest, (key, value)) = lexer::attribute(Cursor::new("id = '7' />"))?;
//! assert_eq!((key.as_str(), value.as_str()), ("id", "7"));
//! assert_eq!(rest.remaining(), " />");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Expected, Pos, Result, Span};

pub mod lexer;
pub use lexer::{Cursor, Match};

pub mod xml;
pub use xml::{Config, Document, Element, Parser, TreePrinter, MAX_SAFE_DEPTH};

/// Parse a document from a string with the default configuration
pub fn from_str(s: &str) -> Result<Document> {
    Parser::new(s).parse()
}

/// Parse with custom configuration
pub fn from_str_with_config(s: &str, config: Config) -> Result<Document> {
    Parser::with_config(s, config).parse()
}

/// Parse a document from bytes, which must be UTF-8
pub fn from_bytes(bytes: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(bytes).map_err(|e| {
        // the prefix before the first invalid byte is valid UTF-8
        let prefix = bytes
            .get(..e.valid_up_to())
            .and_then(|b| std::str::from_utf8(b).ok())
            .unwrap_or_default();
        let mut end = Cursor::new(prefix);
        while !end.is_eof() {
            end = end.advance();
        }
        Error::mismatch(Expected::Category("utf-8 text"), end.position())
    })?;
    from_str(s)
}
