//! Immutable input cursor
//!
//! A [`Cursor`] is a position in the input plus the input itself. It is
//! `Copy`: advancing returns a new cursor and leaves the old one untouched,
//! so a rule backtracks simply by not using the cursor it produced.

use std::cmp::Ordering;

use crate::error::Pos;

/// Cursor over character input with line/column tracking
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    /// Create cursor at the start of `input`
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Character at the current position
    pub fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Cursor moved past the current character. At end of input the cursor
    /// is returned unchanged.
    #[must_use]
    pub fn advance(self) -> Self {
        let Some(c) = self.current() else {
            return self;
        };

        let (line, col) = if c == '\n' {
            (self.line.saturating_add(1), 1)
        } else {
            (self.line, self.col.saturating_add(1))
        };

        Self {
            pos: self.pos + c.len_utf8(),
            line,
            col,
            ..self
        }
    }

    /// Check if at end of input
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Byte offset into the input
    pub const fn offset(&self) -> usize {
        self.pos
    }

    /// Current position, for error reporting
    pub const fn position(&self) -> Pos {
        Pos::new(self.pos, self.line, self.col)
    }

    /// Unconsumed input
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    /// Input consumed between `start` and this cursor
    pub fn since(&self, start: &Self) -> &'a str {
        self.input.get(start.pos..self.pos).unwrap_or_default()
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cursor<'_> {}

impl PartialOrd for Cursor<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}
