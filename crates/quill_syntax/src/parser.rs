//! Parser for the Quill scripting language.
//!
//! Converts a token sequence into an abstract syntax tree rooted at
//! [`ast::RootNode`]. The grammar is deliberately small: `const`/`let`
//! declaration lists, literal expressions, array expressions, and retained
//! comments. Constructs the language reserves but does not support (`func`
//! declarations, `map` literals) are rejected with a clear error instead of
//! being misparsed.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use quill_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("let flags = [true, false]\n").unwrap();
//! let root = parser::parse(tokens).unwrap();
//! assert_eq!(root.body.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::SyntaxError;
use crate::keywords::{self, Keyword};
use crate::lexer::{Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all
// parser methods in the same Rust module (preserving privacy + call patterns)
// while avoiding a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
