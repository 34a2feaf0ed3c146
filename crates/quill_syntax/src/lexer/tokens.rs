//! Token types for the Quill lexer.
//!
//! Tokens are plain `kind + text` values. Reserved words are **not** a token kind:
//! `const`, `let`, `true`, and friends come out of the lexer as ordinary `Name`
//! tokens, and only the parser interprets their spelling. This keeps the lexer
//! context-free and keeps the reserved-word set in one place
//! (`crate::keywords`).

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Bracket, brace, or parenthesis character.
    Enclosure,
    /// Identifier-shaped run of letters, digits, and underscores.
    /// Includes reserved words; the parser tells them apart by spelling.
    Name,
    /// String literal body, delimiters stripped.
    Str,
    /// Numeric literal text, including a `0x` prefix for hex literals.
    Number,
    /// Single-character operator (`= > < ! | & + - * / %`).
    /// Multi-character operators such as `==` arrive as adjacent tokens.
    Operator,
    /// Pure whitespace. Never emitted: the scanner consumes whitespace without
    /// producing a token. The variant exists to keep the enumeration closed.
    Empty,
    /// End of input. Always the final token of a lexed sequence, exactly once.
    Eof,
    /// Line terminator (`\n`, `\r`, or `;`).
    Eol,
    /// Comment body, `//` or `/* */` delimiters stripped.
    Comment,
    /// Element separator (`,`).
    Separator,
}

/// A classified lexical unit: kind plus the literal text it carries.
///
/// `Eol` and `Eof` tokens carry empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
