//! Property-based tests for the Quill front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use quill::lexer::{self, TokenKind};

proptest! {
    /// Property: identifier-shaped input lexes to exactly one Name token.
    /// Reserved words are deliberately not excluded here - the lexer treats
    /// them as plain names; only the parser tells them apart.
    #[test]
    fn identifiers_lex_to_a_single_name_token(id in "[a-z_][a-z0-9_]{0,30}") {
        let tokens = lexer::lex(&id).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Name);
        prop_assert_eq!(tokens[0].text.as_str(), id.as_str());
        prop_assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    /// Property: digit runs lex to exactly one Number token with the raw text.
    #[test]
    fn integers_lex_to_a_single_number_token(n in "[0-9]{1,18}") {
        let tokens = lexer::lex(&n).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(tokens[0].text.as_str(), n.as_str());
    }

    /// Property: lexing the same input twice yields identical sequences.
    #[test]
    fn lexing_is_deterministic(input in "[ -~\\n\\t]{1,64}") {
        match (lexer::lex(&input), lexer::lex(&input)) {
            (Ok(first), Ok(second)) => prop_assert_eq!(first, second),
            (Err(first), Err(second)) => prop_assert_eq!(first.message, second.message),
            _ => prop_assert!(false, "lexing was not deterministic for {:?}", input),
        }
    }

    /// Property: arbitrary printable input never panics the lexer; it returns
    /// a token sequence or a fatal error. (Empty input is an error, not a
    /// panic.)
    #[test]
    fn lexer_never_panics(input in "[ -~\\n\\t]{0,64}") {
        let _ = lexer::lex(&input);
    }

    /// Property: whenever lexing succeeds, the sequence ends with exactly one
    /// EOF and carries no Empty tokens.
    #[test]
    fn successful_lexes_end_with_a_single_eof(input in "[a-z0-9 =,\\n]{1,64}") {
        if let Ok(tokens) = lexer::lex(&input) {
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
            prop_assert!(tokens.iter().all(|t| t.kind != TokenKind::Empty));
        }
    }
}
