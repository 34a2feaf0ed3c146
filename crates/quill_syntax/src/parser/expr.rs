/// Single-node dispatch and expression parsing.
///
/// `walk` is the heart of the parser: it removes one token and either yields a
/// node, yields nothing (a line break consumed as a pure separator), or fails.
/// Declaration and array parsing re-enter it for nested content.
impl Parser {
    /// Consume one token and produce at most one node.
    ///
    /// Yields `None` only for `Eol`, which is an ignorable separator at
    /// statement level. Observing EOF here is an error: the sentinel belongs
    /// to the outer loop and must never be consumed by a nested parse.
    fn walk(&mut self) -> Result<Option<Node>, SyntaxError> {
        let token = self.advance();

        match token.kind {
            TokenKind::Number => Ok(Some(Node::Expr(Expr::Number(NumberNode {
                value: token.text,
            })))),
            TokenKind::Str => Ok(Some(Node::Expr(Expr::Str(StringNode {
                value: token.text,
            })))),
            TokenKind::Comment => Ok(Some(Node::Comment(CommentNode {
                value: token.text,
            }))),
            TokenKind::Eof => Err(SyntaxError::structural("unexpected end of input")),
            TokenKind::Eol => Ok(None),
            TokenKind::Enclosure if token.text == "[" => {
                Ok(Some(Node::Expr(Expr::Array(self.array()?))))
            }
            TokenKind::Name => self.name(token).map(Some),
            _ => Err(SyntaxError::structural(format!(
                "unexpected {:?} token {:?}",
                token.kind, token.text
            ))),
        }
    }

    /// Branch on the spelling of a `Name` token: reserved words dispatch into
    /// the grammar, everything else is rejected (bare identifiers are not yet
    /// a valid expression in this grammar).
    fn name(&mut self, token: Token) -> Result<Node, SyntaxError> {
        match keywords::from_str(&token.text) {
            Some(Keyword::Const) => self.declaration(DeclKind::Const).map(Node::Declaration),
            Some(Keyword::Let) => self.declaration(DeclKind::Let).map(Node::Declaration),
            Some(Keyword::True | Keyword::False) => Ok(Node::Expr(Expr::Boolean(BooleanNode {
                value: token.text,
            }))),
            Some(Keyword::Array) => {
                let open = self.advance();
                if open.kind != TokenKind::Enclosure || open.text != "[" {
                    return Err(SyntaxError::structural(format!(
                        "expected \"[\" after \"array\", found {:?} token {:?}",
                        open.kind, open.text
                    )));
                }
                Ok(Node::Expr(Expr::Array(self.array()?)))
            }
            Some(Keyword::Func) => Err(SyntaxError::structural(
                "\"func\" declarations are not supported",
            )),
            Some(Keyword::Map) => Err(SyntaxError::structural(
                "\"map\" literals are not supported",
            )),
            None => Err(SyntaxError::structural(format!(
                "unexpected name {:?}; bare identifiers are not a valid expression",
                token.text
            ))),
        }
    }

    /// Parse an array body after its `[` has been consumed.
    ///
    /// Exactly one `,` is required between elements: a leading comma, a
    /// doubled comma, and a trailing comma before `]` are all errors. Line
    /// breaks between elements are consumed and ignored.
    fn array(&mut self) -> Result<ArrayNode, SyntaxError> {
        let mut elements = Vec::new();
        let mut pending_separator = false;

        loop {
            if self.check_enclosure("]") {
                self.advance();
                if pending_separator {
                    return Err(SyntaxError::structural(
                        "expected an array element after \",\"",
                    ));
                }
                break;
            }

            match self.peek_kind() {
                TokenKind::Separator => {
                    let separator = self.advance();
                    if separator.text != "," {
                        return Err(SyntaxError::structural(format!(
                            "unexpected separator {:?} in array",
                            separator.text
                        )));
                    }
                    if elements.is_empty() {
                        return Err(SyntaxError::structural(
                            "expected an array element before \",\"",
                        ));
                    }
                    if pending_separator {
                        return Err(SyntaxError::structural(
                            "unexpected \",\" after a separator in array",
                        ));
                    }
                    pending_separator = true;
                }
                TokenKind::Eol => {
                    self.advance();
                }
                TokenKind::Eof => {
                    return Err(SyntaxError::structural("unexpected end of input in array"));
                }
                _ => {
                    if !elements.is_empty() && !pending_separator {
                        return Err(SyntaxError::structural(
                            "expected \",\" between array elements",
                        ));
                    }
                    let Some(node) = self.walk()? else { continue };
                    match node {
                        Node::Expr(expr) => elements.push(expr),
                        other => {
                            return Err(SyntaxError::structural(format!(
                                "expected an expression as array element, found {}",
                                other.kind_name()
                            )));
                        }
                    }
                    pending_separator = false;
                }
            }
        }

        Ok(ArrayNode { elements })
    }
}
