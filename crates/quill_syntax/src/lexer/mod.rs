//! Lexer for the Quill scripting language.
//!
//! Handles tokenization including:
//! - Names (identifiers *and* reserved words; the parser tells them apart)
//! - Numeric literals (decimal, decimal-point, and `0x` hex forms)
//! - Strings, including triple-quoted multi-line strings with indent stripping
//! - Full-line (`//`) and block (`/* */`) comments, retained as tokens
//! - Single-character operators, enclosures, and separators
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String and multi-line string scanning
//! - `numbers` - Numeric literal scanning
//! - `comments` - Full-line and block comment scanning

mod comments;
mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::diagnostics::SyntaxError;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// A single byte cursor walks the source left to right. Each iteration
// classifies the character under the cursor and either emits one token or
// consumes silently (whitespace). The cursor deliberately runs one past the
// end of the input: that final position is where the EOF token is emitted.
// ============================================================================

/// Lexer for Quill source code.
///
/// Owns a scan cursor over an immutable input string. A lexer is single-use:
/// [`Lexer::tokenize`] consumes it and yields the full token sequence or the
/// first fatal error.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// The returned sequence always ends with exactly one `Eof` token.
    /// Whitespace is consumed without being represented; every other input
    /// character is accounted for by some token, minus delimiter characters
    /// (quotes, comment markers) consumed as part of a multi-character token.
    ///
    /// ## Errors
    /// Fails fast on empty input, and on the first malformed construct:
    /// an unknown character, an unterminated string, or a repeated decimal
    /// point. There is no recovery and no partial token sequence.
    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        if self.source.is_empty() {
            return Err(SyntaxError::lexical("input must not be empty", 0));
        }

        while self.pos <= self.source.len() {
            let before = self.pos;
            if let Some(token) = self.scan_token()? {
                self.tokens.push(token);
            }
            // Every dispatch must move the cursor; a stuck cursor would loop
            // forever, so treat it as a defect and abort.
            assert!(
                self.pos > before,
                "INVARIANT: scanner failed to advance at byte {before}"
            );
        }

        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn rest(&self) -> &str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<Option<Token>, SyntaxError> {
        let Some(c) = self.peek() else {
            // One step past the last character: emit EOF and move the cursor
            // past the end so the outer loop terminates.
            self.pos += 1;
            return Ok(Some(Token::new(TokenKind::Eof, "")));
        };

        // Line terminators. `;` is an explicit statement terminator and lexes
        // the same as a newline; the parser never sees a distinction.
        if matches!(c, '\n' | '\r' | ';') {
            self.pos += 1;
            return Ok(Some(Token::new(TokenKind::Eol, "")));
        }

        if matches!(c, '(' | ')' | '[' | ']' | '{' | '}') {
            self.pos += 1;
            return Ok(Some(Token::new(TokenKind::Enclosure, c.to_string())));
        }

        if c.is_whitespace() {
            self.pos += c.len_utf8();
            return Ok(None);
        }

        if c == '"' || c == '`' {
            return self.scan_string(c).map(Some);
        }

        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(Some(self.scan_name()));
        }

        if c.is_ascii_digit() {
            return self.scan_number().map(Some);
        }

        // Comment openers need two characters of lookahead and must win over
        // the `/` operator below.
        if self.rest().starts_with("//") {
            return Ok(Some(self.scan_line_comment()));
        }
        if self.rest().starts_with("/*") {
            return Ok(Some(self.scan_block_comment()));
        }

        // One-character operators only. `==` and `&&` come out as two adjacent
        // tokens; merging them is a later stage's decision.
        if matches!(c, '=' | '>' | '<' | '!' | '|' | '&' | '+' | '-' | '*' | '/' | '%') {
            self.pos += 1;
            return Ok(Some(Token::new(TokenKind::Operator, c.to_string())));
        }

        if c == ',' {
            self.pos += 1;
            return Ok(Some(Token::new(TokenKind::Separator, c.to_string())));
        }

        Err(SyntaxError::lexical(
            format!("unknown token {c:?}"),
            self.pos,
        ))
    }

    // ========================================================================
    // Name scanning
    // ========================================================================

    fn scan_name(&mut self) -> Token {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        Token::new(TokenKind::Name, &self.source[start..self.pos])
    }
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
