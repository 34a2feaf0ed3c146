//! Comment scanning for the Quill lexer.
//!
//! Comments survive lexing as `Comment` tokens carrying the body without
//! delimiters; the parser keeps them as AST nodes.

use super::Lexer;
use super::tokens::{Token, TokenKind};

impl Lexer<'_> {
    /// Scan a `//` comment. Consumes to (but not past) the next line
    /// terminator, which the main loop then emits as its own `Eol` token.
    pub(super) fn scan_line_comment(&mut self) -> Token {
        self.pos += 2; // past "//"
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '\n' || c == '\r' {
                break;
            }
            self.pos += c.len_utf8();
        }
        Token::new(TokenKind::Comment, &self.source[start..self.pos])
    }

    /// Scan a `/* */` comment. An unclosed block comment is tolerated and
    /// terminates at end of input.
    pub(super) fn scan_block_comment(&mut self) -> Token {
        self.pos += 2; // past "/*"
        let start = self.pos;
        match self.source[start..].find("*/") {
            Some(close_at) => {
                self.pos = start + close_at + 2;
                Token::new(TokenKind::Comment, &self.source[start..start + close_at])
            }
            None => {
                self.pos = self.source.len();
                Token::new(TokenKind::Comment, &self.source[start..])
            }
        }
    }
}
