#[cfg(test)]
/// Parser unit tests.
///
/// These tests cover the specific syntactic forms of the grammar and the
/// parser's fatal-error behavior for everything the grammar rejects.
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;
    use crate::lexer;

    fn parse_source(source: &str) -> Result<RootNode, SyntaxError> {
        parse(lexer::lex(source)?)
    }

    fn number(value: &str) -> Expr {
        Expr::Number(NumberNode {
            value: value.to_string(),
        })
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    #[test]
    fn maps_a_const_string_declaration() {
        let root = parse_source("const key = \"Hello String\"").unwrap();
        assert_eq!(
            root,
            RootNode {
                body: vec![Node::Declaration(DeclarationNode {
                    kind: DeclKind::Const,
                    declarations: vec![VariableNode {
                        id: "key".to_string(),
                        init: Some(Expr::Str(StringNode {
                            value: "Hello String".to_string(),
                        })),
                    }],
                })],
            }
        );
    }

    #[test]
    fn maps_multi_variable_declarations() {
        let root = parse_source("let a = 1, b = 2, c = 3").unwrap();
        let Node::Declaration(decl) = &root.body[0] else {
            panic!("expected a declaration, got {:?}", root.body);
        };
        assert_eq!(decl.kind, DeclKind::Let);
        assert_eq!(
            decl.declarations,
            vec![
                VariableNode {
                    id: "a".to_string(),
                    init: Some(number("1")),
                },
                VariableNode {
                    id: "b".to_string(),
                    init: Some(number("2")),
                },
                VariableNode {
                    id: "c".to_string(),
                    init: Some(number("3")),
                },
            ]
        );
    }

    #[test]
    fn line_break_after_comma_continues_the_declaration() {
        let root = parse_source("let a = 1,\nb = 2").unwrap();
        let Node::Declaration(decl) = &root.body[0] else {
            panic!("expected a declaration");
        };
        assert_eq!(decl.declarations.len(), 2);
    }

    #[test]
    fn line_break_without_comma_ends_the_declaration() {
        let root = parse_source("let a = 1\nlet b = 2").unwrap();
        assert_eq!(root.body.len(), 2);
        assert!(matches!(root.body[0], Node::Declaration(_)));
        assert!(matches!(root.body[1], Node::Declaration(_)));
    }

    #[test]
    fn binding_without_initializer() {
        let root = parse_source("let banner =\n").unwrap();
        let Node::Declaration(decl) = &root.body[0] else {
            panic!("expected a declaration");
        };
        assert_eq!(
            decl.declarations,
            vec![VariableNode {
                id: "banner".to_string(),
                init: None,
            }]
        );
    }

    #[test]
    fn empty_declaration_is_rejected() {
        // Hand-built stream: the grammar also recognizes an explicit `;`
        // separator as a declaration terminator, even though the lexer turns
        // `;` into an end-of-line token.
        let tokens = vec![
            Token::new(TokenKind::Name, "const"),
            Token::new(TokenKind::Separator, ";"),
            Token::new(TokenKind::Eof, ""),
        ];
        let err = parse(tokens).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Structural);
        assert!(
            err.message
                .contains("expected at least one variable binding in declaration"),
            "{}",
            err.message
        );
    }

    #[test]
    fn doubled_comma_in_declaration_is_rejected() {
        let err = parse_source("let a = 1,, b = 2").unwrap_err();
        assert!(err.message.contains("\",\""), "{}", err.message);
    }

    #[test]
    fn keyword_as_variable_name_is_rejected() {
        let err = parse_source("const let = 1").unwrap_err();
        assert!(
            err.message.contains("cannot be used as a variable name"),
            "{}",
            err.message
        );
    }

    #[test]
    fn missing_equals_is_rejected() {
        let err = parse_source("const key 5").unwrap_err();
        assert!(err.message.contains("expected \"=\""), "{}", err.message);
    }

    #[test]
    fn equals_at_end_of_input_is_rejected() {
        let err = parse_source("const key").unwrap_err();
        assert!(err.message.contains("expected \"=\""), "{}", err.message);
    }

    #[test]
    fn nested_declaration_as_initializer_is_rejected() {
        let err = parse_source("let a = const b = 1").unwrap_err();
        assert!(
            err.message
                .contains("expected an expression as variable initializer"),
            "{}",
            err.message
        );
    }

    #[test]
    fn comment_as_initializer_is_rejected() {
        let err = parse_source("let a = // note").unwrap_err();
        assert!(
            err.message
                .contains("expected an expression as variable initializer"),
            "{}",
            err.message
        );
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    #[test]
    fn lone_true_is_a_boolean_literal() {
        let root = parse_source("true").unwrap();
        assert_eq!(
            root.body,
            vec![Node::Expr(Expr::Boolean(BooleanNode {
                value: "true".to_string(),
            }))]
        );
    }

    #[test]
    fn bare_and_keyword_arrays_are_equivalent() {
        let bare = parse_source("[1, 2]").unwrap();
        let prefixed = parse_source("array [1, 2]").unwrap();
        assert_eq!(bare, prefixed);
        assert_eq!(
            bare.body,
            vec![Node::Expr(Expr::Array(ArrayNode {
                elements: vec![number("1"), number("2")],
            }))]
        );
    }

    #[test]
    fn arrays_nest() {
        let root = parse_source("[1, [2, 3], 4]").unwrap();
        let Node::Expr(Expr::Array(array)) = &root.body[0] else {
            panic!("expected an array");
        };
        assert_eq!(array.elements.len(), 3);
        assert_eq!(
            array.elements[1],
            Expr::Array(ArrayNode {
                elements: vec![number("2"), number("3")],
            })
        );
    }

    #[test]
    fn arrays_allow_line_breaks_between_elements() {
        let root = parse_source("[1,\n2,\n3]").unwrap();
        let Node::Expr(Expr::Array(array)) = &root.body[0] else {
            panic!("expected an array");
        };
        assert_eq!(array.elements.len(), 3);
    }

    #[test]
    fn array_keyword_requires_a_bracket() {
        let err = parse_source("array 1").unwrap_err();
        assert!(
            err.message.contains("expected \"[\" after \"array\""),
            "{}",
            err.message
        );
    }

    #[test]
    fn array_separator_rules_are_strict() {
        // Exactly one comma between elements; everything else is an error.
        let leading = parse_source("[, 1]").unwrap_err();
        assert!(
            leading.message.contains("before \",\""),
            "{}",
            leading.message
        );

        let doubled = parse_source("[1,, 2]").unwrap_err();
        assert!(
            doubled.message.contains("after a separator"),
            "{}",
            doubled.message
        );

        let trailing = parse_source("[1, 2,]").unwrap_err();
        assert!(
            trailing.message.contains("after \",\""),
            "{}",
            trailing.message
        );

        let missing = parse_source("[1 2]").unwrap_err();
        assert!(
            missing.message.contains("between array elements"),
            "{}",
            missing.message
        );
    }

    #[test]
    fn unterminated_array_is_rejected() {
        let err = parse_source("[1,").unwrap_err();
        assert!(
            err.message.contains("unexpected end of input"),
            "{}",
            err.message
        );
    }

    #[test]
    fn comment_as_array_element_is_rejected() {
        let err = parse_source("[// note\n]").unwrap_err();
        assert!(
            err.message.contains("expected an expression as array element"),
            "{}",
            err.message
        );
    }

    // ------------------------------------------------------------------
    // Dispatch edges
    // ------------------------------------------------------------------

    #[test]
    fn comments_become_nodes() {
        let root = parse_source("// header\nconst a = 1").unwrap();
        assert_eq!(root.body.len(), 2);
        assert_eq!(
            root.body[0],
            Node::Comment(CommentNode {
                value: " header".to_string(),
            })
        );
    }

    #[test]
    fn line_breaks_yield_nothing_at_statement_level() {
        let root = parse_source("\n\n\nconst a = 1\n\n").unwrap();
        assert_eq!(root.body.len(), 1);
    }

    #[test]
    fn parse_terminates_at_the_eof_sentinel() {
        // The sequence is drained up to, but never past, the trailing EOF.
        let root = parse_source("const a = 1").unwrap();
        assert_eq!(root.body.len(), 1);

        // A sequence without an explicit EOF gets a synthetic one.
        let tokens = vec![Token::new(TokenKind::Name, "true")];
        let root = parse(tokens).unwrap();
        assert_eq!(root.body.len(), 1);
    }

    #[test]
    fn unsupported_constructs_are_rejected() {
        let err = parse_source("func greet").unwrap_err();
        assert!(err.message.contains("not supported"), "{}", err.message);
        assert!(err.message.contains("func"), "{}", err.message);

        let err = parse_source("map").unwrap_err();
        assert!(err.message.contains("not supported"), "{}", err.message);
    }

    #[test]
    fn bare_identifiers_are_rejected() {
        let err = parse_source("greeting").unwrap_err();
        assert!(err.message.contains("unexpected name"), "{}", err.message);
    }

    #[test]
    fn stray_tokens_are_rejected() {
        for source in ["=", ",", "]"] {
            let err = parse_source(source);
            assert!(err.is_err(), "expected {source:?} to be rejected");
        }
    }
}
