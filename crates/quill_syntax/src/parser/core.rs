/// Parser core type and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods
///   in a single module while avoiding a single "god file".

/// Parser state.
///
/// Owns the token sequence and consumes it front to back through an index
/// cursor. A parser instance is single-use: the sequence is drained by one
/// `parse()` call and must not be shared or reused.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser for a token sequence.
    ///
    /// The grammar relies on an EOF sentinel as the final token; if the
    /// caller's sequence carries none, a synthetic one is appended.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.iter().any(|t| t.kind == TokenKind::Eof) {
            tokens.push(Token::new(TokenKind::Eof, ""));
        }
        Self { tokens, pos: 0 }
    }

    /// Parse the entire token sequence into a [`RootNode`].
    ///
    /// Each step either yields one node for the root body or consumes a pure
    /// separator (`Eol`) without yielding anything. The loop stops at the EOF
    /// sentinel, which is observed but never consumed.
    ///
    /// ## Errors
    /// The first grammar violation aborts the parse; there is no recovery and
    /// no partial tree.
    pub fn parse(mut self) -> Result<RootNode, SyntaxError> {
        let mut body = Vec::new();

        while self.peek_kind() != TokenKind::Eof {
            if let Some(node) = self.walk()? {
                body.push(node);
            }
        }

        Ok(RootNode { body })
    }
}
