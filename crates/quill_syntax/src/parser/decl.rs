/// Declaration parsing.
///
/// A declaration is `const`/`let` followed by one or more comma-separated
/// variable bindings, each `name = <expression>` or a bare `name =` with no
/// initializer. The list ends at an explicit `;` separator, at a line break
/// that does not directly follow a comma, or at end of input.
impl Parser {
    /// Parse the binding list of a declaration whose keyword has already been
    /// consumed.
    ///
    /// The loop tracks one piece of state: whether a `,` separator is pending.
    /// A pending separator permits a line break before the next binding and
    /// rejects a second comma; parsing a binding clears it.
    fn declaration(&mut self, kind: DeclKind) -> Result<DeclarationNode, SyntaxError> {
        let mut declarations = Vec::new();
        let mut had_separator = false;

        loop {
            match self.peek_kind() {
                TokenKind::Eof => break,
                TokenKind::Separator => {
                    let separator = self.advance();
                    match separator.text.as_str() {
                        ";" => break,
                        "," if had_separator => {
                            return Err(SyntaxError::structural(
                                "unexpected \",\" after a separator in declaration list",
                            ));
                        }
                        "," => had_separator = true,
                        other => {
                            return Err(SyntaxError::structural(format!(
                                "unexpected separator {other:?} in declaration list"
                            )));
                        }
                    }
                }
                TokenKind::Eol => {
                    self.advance();
                    // A line break right after a comma is ignorable; without
                    // one it ends the declaration.
                    if !had_separator {
                        break;
                    }
                }
                TokenKind::Name => {
                    let name = self.advance();
                    declarations.push(self.variable(name)?);
                    had_separator = false;
                }
                _ => {
                    let token = self.advance();
                    return Err(SyntaxError::structural(format!(
                        "unexpected {:?} token {:?} in declaration list",
                        token.kind, token.text
                    )));
                }
            }
        }

        if declarations.is_empty() {
            return Err(SyntaxError::structural(
                "expected at least one variable binding in declaration",
            ));
        }

        Ok(DeclarationNode { kind, declarations })
    }

    /// Parse one variable binding, given its already-consumed `Name` token.
    fn variable(&mut self, name: Token) -> Result<VariableNode, SyntaxError> {
        let id = name.text;

        // Reserved words cannot be shadowed as identifiers.
        if keywords::is_reserved(&id) {
            return Err(SyntaxError::structural(format!(
                "keyword {id:?} cannot be used as a variable name"
            )));
        }

        let operator = self.advance();
        if operator.kind != TokenKind::Operator || operator.text != "=" {
            return Err(SyntaxError::structural(format!(
                "expected \"=\" after variable name {:?}, found {:?} token {:?}",
                id, operator.kind, operator.text
            )));
        }

        // A terminator right after `=` means the binding has no initializer;
        // the terminator itself is consumed with it.
        if matches!(self.peek_kind(), TokenKind::Eol | TokenKind::Separator) {
            self.advance();
            return Ok(VariableNode { id, init: None });
        }

        let node = loop {
            if let Some(node) = self.walk()? {
                break node;
            }
        };

        match node {
            Node::Expr(init) => Ok(VariableNode {
                id,
                init: Some(init),
            }),
            other => Err(SyntaxError::structural(format!(
                "expected an expression as variable initializer, found {}",
                other.kind_name()
            ))),
        }
    }
}
