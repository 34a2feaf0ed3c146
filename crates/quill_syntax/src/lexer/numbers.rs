//! Number scanning for the Quill lexer.
//!
//! Literals keep their raw source text: `0x0fF` stays `0x0fF`, `1.10` stays
//! `1.10`. Interpreting the value belongs to a later stage.

use super::Lexer;
use super::tokens::{Token, TokenKind};
use crate::diagnostics::SyntaxError;

impl Lexer<'_> {
    /// Scan a numeric literal starting at a digit.
    pub(super) fn scan_number(&mut self) -> Result<Token, SyntaxError> {
        let start = self.pos;

        // Hex literal: greedy hex digits, prefix included in the token text.
        if self.rest().starts_with("0x") {
            self.pos += 2;
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.pos += 1;
            }
            return Ok(Token::new(TokenKind::Number, &self.source[start..self.pos]));
        }

        let mut seen_point = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.pos += 1;
            } else if c == '.' {
                if seen_point {
                    return Err(SyntaxError::lexical(
                        "decimal point repeated in numeric literal",
                        self.pos,
                    ));
                }
                seen_point = true;
                self.pos += 1;
            } else {
                break;
            }
        }

        Ok(Token::new(TokenKind::Number, &self.source[start..self.pos]))
    }
}
