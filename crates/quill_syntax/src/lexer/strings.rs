//! String scanning for the Quill lexer.
//!
//! Covers single-line strings and triple-quoted multi-line strings. Either
//! `"` or a backtick may delimit a string; the closing character is always the
//! same as the opening one. Three opening characters in a row switch the
//! scanner into multi-line mode, which strips the source indentation of the
//! opening delimiter's line from every line of the body.

use super::Lexer;
use super::tokens::{Token, TokenKind};
use crate::diagnostics::SyntaxError;

impl Lexer<'_> {
    /// Scan a string starting at the opening quote character.
    pub(super) fn scan_string(&mut self, quote: char) -> Result<Token, SyntaxError> {
        let bytes = self.rest().as_bytes();
        if bytes.len() >= 3 && bytes[1] == quote as u8 && bytes[2] == quote as u8 {
            return self.scan_multi_line_string(quote);
        }

        let start = self.pos;
        self.pos += 1; // opening quote
        let body_start = self.pos;

        loop {
            match self.peek() {
                None | Some('\n') | Some('\r') => {
                    return Err(SyntaxError::lexical("unterminated string", start));
                }
                Some(c) if c == quote => {
                    let body_end = self.pos;
                    self.pos += 1; // closing quote
                    return Ok(Token::new(
                        TokenKind::Str,
                        &self.source[body_start..body_end],
                    ));
                }
                Some(c) => self.pos += c.len_utf8(),
            }
        }
    }

    /// Scan a triple-quoted string, stripping the opening line's indent from
    /// every body line.
    fn scan_multi_line_string(&mut self, quote: char) -> Result<Token, SyntaxError> {
        let delim_start = self.pos;

        // The indent is whatever sits between the start of the delimiter's
        // line and the delimiter itself. A line terminator immediately before
        // the delimiter means an empty indent.
        let line_start = self.source[..delim_start]
            .rfind(['\n', '\r'])
            .map_or(0, |i| i + 1);
        let indent = self.source[line_start..delim_start].to_string();

        self.pos += 3; // opening delimiter
        let body_start = self.pos;

        let close: String = std::iter::repeat(quote).take(3).collect();
        let Some(close_at) = self.source[body_start..].find(&close) else {
            return Err(SyntaxError::lexical("unterminated string", delim_start));
        };

        let body = &self.source[body_start..body_start + close_at];
        self.pos = body_start + close_at + 3; // past the closing delimiter

        Ok(Token::new(TokenKind::Str, strip_indent(body, &indent)))
    }
}

/// Remove `indent` from the start of every line of `body` and drop the
/// delimiter lines: the empty first line right after the opening delimiter
/// and the final line that held the closing delimiter (empty once its indent
/// is stripped). Lines that do not start with the indent are left unchanged.
fn strip_indent(body: &str, indent: &str) -> String {
    let mut lines: Vec<&str> = body
        .split('\n')
        .map(|line| line.strip_prefix(indent).unwrap_or(line))
        .collect();

    if lines.first().is_some_and(|line| line.is_empty()) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
