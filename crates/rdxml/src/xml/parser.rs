//! Structural rules: declaration, prologue, elements and the document
//!
//! Every rule takes a [`Cursor`] by value and returns the advanced cursor
//! with its result. On failure the caller still holds its own cursor, so
//! backtracking needs no bookkeeping: an optional production just keeps the
//! cursor it had before the attempt.

use tracing::{debug, instrument, trace};

use crate::error::{Error, ErrorKind, Expected, Result, Span};
use crate::lexer::lexical::{attribute, chardata, name, Match};
use crate::lexer::token::{
    equals, is_whitespace, match_char, match_string, maybe_whitespace, optional, whitespace,
};
use crate::lexer::Cursor;
use crate::xml::model::{Document, Element, DEFAULT_VERSION};

/// Hard ceiling on element nesting.
///
/// `element` recurses once per level, and so does dropping the tree, so
/// depth is always bounded by this even when the configured limit is 0 or
/// larger.
pub const MAX_SAFE_DEPTH: u16 = 256;

/// Configuration for the XML parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum element nesting depth (0 means [`MAX_SAFE_DEPTH`]; larger
    /// values are capped to it)
    pub max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_size: 10 * 1024 * 1024, // 10 MB default
        }
    }
}

impl Config {
    /// Create a new config with unlimited size and the deepest nesting the
    /// parser supports
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    /// Create a new config with specific limits
    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }

    /// Depth limit actually enforced
    pub const fn effective_max_depth(&self) -> u16 {
        if self.max_depth == 0 || self.max_depth > MAX_SAFE_DEPTH {
            MAX_SAFE_DEPTH
        } else {
            self.max_depth
        }
    }
}

/// `version = '1.0'` inside the XML declaration.
///
/// Only version 1.0 is supported; either quote style is accepted.
pub fn version_info(cursor: Cursor<'_>) -> Result<Match<'_, String>> {
    let cur = whitespace(cursor)?;
    let cur = match_string(cur, "version")?;
    let cur = equals(cur)?;
    let cur = match_string(cur, "'1.0'").or_else(|_| match_string(cur, "\"1.0\""))?;
    Ok((cur, DEFAULT_VERSION.to_string()))
}

/// `<?xml version="1.0"?>`
pub fn xml_decl(cursor: Cursor<'_>) -> Result<Match<'_, String>> {
    let cur = match_string(cursor, "<?xml")?;
    let (cur, version) = version_info(cur)?;
    let cur = maybe_whitespace(cur);
    let cur = match_string(cur, "?>")?;
    Ok((cur, version))
}

/// Optional declaration followed by optional whitespace. Never fails.
pub fn prologue(cursor: Cursor<'_>) -> Match<'_, Document> {
    let (cur, version) = match xml_decl(cursor) {
        Ok(decl) => decl,
        Err(_) => (cursor, DEFAULT_VERSION.to_string()),
    };
    (maybe_whitespace(cur), Document::new(version))
}

/// XML parser
#[derive(Clone, Copy, Debug)]
pub struct Parser<'a> {
    input: &'a str,
    config: Config,
}

impl<'a> Parser<'a> {
    /// Create a new parser with default configuration
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, Config::default())
    }

    /// Create a new parser with custom configuration
    pub const fn with_config(input: &'a str, config: Config) -> Self {
        Self { input, config }
    }

    pub const fn config(&self) -> Config {
        self.config
    }

    /// Parse the whole input as one document.
    ///
    /// Whitespace may follow the root element; anything else is an error.
    #[instrument(level = "debug", skip_all, fields(len = self.input.len()))]
    pub fn parse(&self) -> Result<Document> {
        debug!(
            max_depth = self.config.effective_max_depth(),
            max_size = self.config.max_size,
            "parsing document"
        );
        self.check_size()?;

        let result = self.document(Cursor::new(self.input)).and_then(|(cur, doc)| {
            let cur = maybe_whitespace(cur);
            if cur.is_eof() {
                Ok(doc)
            } else {
                Err(Error::mismatch(
                    Expected::Category("end of input"),
                    cur.position(),
                ))
            }
        });

        match &result {
            Ok(doc) => debug!(
                version = %doc.version,
                root = doc.root.as_ref().map_or("", |r| r.name.as_str()),
                "parsed document"
            ),
            Err(err) => debug!(error = %err, "document rejected"),
        }
        result
    }

    /// Prologue followed by exactly one root element.
    ///
    /// Failure to parse the root element fails the document.
    pub fn document<'c>(&self, cursor: Cursor<'c>) -> Result<Match<'c, Document>> {
        let (cur, mut doc) = prologue(cursor);
        let (cur, root) = self.element_at(cur, 1)?;
        doc.root = Some(root);
        Ok((cur, doc))
    }

    /// A single element with its attributes, children or character data, and
    /// its closing tag
    pub fn element<'c>(&self, cursor: Cursor<'c>) -> Result<Match<'c, Element>> {
        self.element_at(cursor, 1)
    }

    fn element_at<'c>(&self, cursor: Cursor<'c>, depth: u16) -> Result<Match<'c, Element>> {
        // start tag
        let cur = match_char(cursor, '<')?;
        let (mut cur, tag) = name(cur)?;
        self.check_depth(depth, cursor)?;
        trace!(name = %tag, depth, "element opened");

        let mut element = Element::new(tag);

        // attributes
        while let Ok(after_space) = whitespace(cur) {
            cur = after_space;
            match attribute(cur) {
                Ok((next, (key, value))) => {
                    element.attributes.insert(key, value);
                    cur = next;
                }
                // nothing consumed: no further attribute
                Err(err) if err.is_mismatch() && err.offset() == cur.offset() => break,
                Err(err) => return Err(err),
            }
        }

        let self_closing = optional(match_char(cur, '/'))?;
        if let Some(next) = self_closing {
            cur = next;
        }
        cur = match_char(cur, '>')?;

        if self_closing.is_some() {
            trace!(name = %element.name, "element closed");
            return Ok((cur, element));
        }

        // children
        loop {
            cur = maybe_whitespace(cur);
            match optional(self.element_at(cur, depth.saturating_add(1)))? {
                Some((next, child)) => {
                    element.children.push(child);
                    cur = next;
                }
                None => break,
            }
        }

        if element.children.is_empty() {
            if let Some((next, text)) = optional(chardata(cur))? {
                element.value = text.trim_end_matches(is_whitespace).to_string();
                cur = next;
            }
        }

        // end tag
        let cur = match_char(cur, '<')?;
        let cur = match_char(cur, '/')?;
        let cur = match_string(cur, &element.name)?;
        let cur = maybe_whitespace(cur);
        let cur = match_char(cur, '>')?;

        trace!(name = %element.name, children = element.children.len(), "element closed");
        Ok((cur, element))
    }

    fn check_depth(&self, depth: u16, at: Cursor<'_>) -> Result<()> {
        let max = self.config.effective_max_depth();
        if depth > max {
            return Err(Error::new(
                ErrorKind::MaxDepthExceeded { max },
                Span::at(at.position()),
            ));
        }
        Ok(())
    }

    fn check_size(&self) -> Result<()> {
        let max = self.config.max_size;
        if max > 0 && self.input.len() > max {
            return Err(Error::new(
                ErrorKind::MaxSizeExceeded { max },
                Span::at(Cursor::new(self.input).position()),
            ));
        }
        Ok(())
    }
}
