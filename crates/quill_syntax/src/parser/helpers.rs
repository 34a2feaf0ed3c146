/// Token-cursor helpers.
///
/// The low-level primitives used throughout parsing: peeking at and consuming
/// the front of the token sequence.
impl Parser {
    /// Return the token at the cursor without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Return the kind of the token at the cursor.
    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Return `true` if the current token is an enclosure with this spelling.
    fn check_enclosure(&self, text: &str) -> bool {
        let token = self.peek();
        token.kind == TokenKind::Enclosure && token.text == text
    }

    /// Consume and return the token at the cursor.
    ///
    /// The cursor never moves past the trailing EOF sentinel, so calling this
    /// at the end of the sequence keeps returning EOF; every consumer treats
    /// EOF as a terminator or an error, never as progress.
    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }
}
