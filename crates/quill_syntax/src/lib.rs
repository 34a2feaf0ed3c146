//! Syntax frontend for the Quill scripting language: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the CLI and future
//! tooling (transform/codegen stages, formatters).
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not evaluate, transform, or
//!   generate code. Its deliverable is a [`ast::RootNode`].
//! - Reserved words are recognized at the grammar layer only; the lexer emits them
//!   as ordinary `Name` tokens (see [`keywords`]).
//!
//! ## Examples
//! ```rust,no_run
//! use quill_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("const greeting = \"hello\"\n").unwrap();
//! let root = parser::parse(tokens).unwrap();
//! assert_eq!(root.body.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod keywords;
pub mod lexer;
pub mod parser;
