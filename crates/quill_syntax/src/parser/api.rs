/// Parse a token sequence into an AST [`RootNode`].
///
/// This is the main public entrypoint for parsing. It takes ownership of the
/// sequence: tokens are consumed destructively and the sequence cannot be
/// reused afterward.
///
/// ## Errors
/// Returns the first [`SyntaxError`] encountered; the parse has no recovery.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: Vec<Token>) -> Result<RootNode, SyntaxError> {
    Parser::new(tokens).parse()
}
