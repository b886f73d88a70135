//! Rewindable token stream.
//!
//! Tokens are lexed eagerly into a buffer; the stream is that buffer plus an
//! integer cursor. Positions are plain indices copied by value, so saving
//! and restoring a position is exact by construction - there is no partially
//! rewound state to corrupt a sibling parse attempt.

use super::lexer::{Token, tokenize};

/// A saved stream position. Totally ordered; restoring it is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pos(usize);

/// A token buffer with an integer cursor.
///
/// Reading past the end yields [`TokenKind::Eof`] tokens and still advances
/// the cursor, so [`TokenStream::rewind_last`] undoes exactly one `next`
/// even when the consumed token was synthetic end-of-input.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    end_offset: usize,
}

impl TokenStream {
    pub fn new(input: &str) -> Self {
        Self {
            tokens: tokenize(input),
            pos: 0,
            end_offset: input.len(),
        }
    }

    fn token_at(&self, index: usize) -> Token {
        self.tokens
            .get(index)
            .cloned()
            .unwrap_or_else(|| Token::eof(self.end_offset))
    }

    /// Consume and return the token under the cursor.
    pub fn next(&mut self) -> Token {
        let token = self.token_at(self.pos);
        self.pos += 1;
        token
    }

    /// The token under the cursor, without consuming it.
    pub fn peek(&self) -> Token {
        self.token_at(self.pos)
    }

    /// Save the current position.
    pub fn mark(&self) -> Pos {
        Pos(self.pos)
    }

    /// Restore a previously saved position exactly.
    pub fn rewind_to(&mut self, mark: Pos) {
        self.pos = mark.0;
    }

    /// Undo exactly the most recent `next`. Used for single-token lookahead
    /// that turned out wrong; equivalent to `rewind_to` of a mark taken just
    /// before that `next`.
    pub fn rewind_last(&mut self) {
        debug_assert!(self.pos > 0, "rewind_last with nothing consumed");
        self.pos -= 1;
    }

    /// True once every real token has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Byte offset of the token under the cursor.
    pub fn offset(&self) -> usize {
        self.peek().offset
    }
}
