//! Error types for rdxml

use std::fmt;
use thiserror::Error;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    /// Byte offset from the start of the input
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span in source text. Grammar errors are reported at a single point, so
/// `start == end` for them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn at(pos: Pos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

/// What a grammar rule was looking for when it failed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    /// A single literal character
    Char(char),
    /// A literal string, such as a keyword or the name of an open tag
    Literal(String),
    /// A lexical category: "name", "whitespace", "chardata", ...
    Category(&'static str),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Literal(s) => write!(f, "{s}"),
            Self::Category(name) => write!(f, "{name}"),
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input did not match a grammar rule
    GrammarMismatch { expected: Expected },
    MaxDepthExceeded { max: u16 },
    MaxSizeExceeded { max: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrammarMismatch { expected } => write!(f, "token not found: {expected}"),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
        }
    }
}

/// Main error type for rdxml
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    /// Grammar mismatch at `pos`
    pub fn mismatch(expected: Expected, pos: Pos) -> Self {
        Self::new(ErrorKind::GrammarMismatch { expected }, Span::at(pos))
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset of the first point of failure
    pub fn offset(&self) -> usize {
        self.span.start.offset
    }

    /// The expectation that failed, for grammar mismatches
    pub fn expected(&self) -> Option<&Expected> {
        match &self.kind {
            ErrorKind::GrammarMismatch { expected } => Some(expected),
            _ => None,
        }
    }

    /// Whether an optional production may discard this error.
    ///
    /// Only grammar mismatches are recoverable; limit violations always
    /// abort the parse.
    pub fn is_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::GrammarMismatch { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at {}: {}", self.span.start, self.message)
    }
}

/// Result type alias for rdxml
pub type Result<T> = std::result::Result<T, Error>;
