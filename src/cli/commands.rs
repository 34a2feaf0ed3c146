//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use miette::NamedSource;
use quill_syntax::ast::RootNode;
use quill_syntax::diagnostics::SyntaxError;
use quill_syntax::{lexer, parser};

use super::{CliError, CliResult, ExitCode};
use crate::source;

/// Lex and display tokens.
pub fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let source_text = source::load(path)?;
    let tokens = lexer::lex(&source_text).map_err(|err| render(path, &source_text, err))?;

    for token in &tokens {
        println!("{token:?}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the AST.
pub fn parse_file(path: &Path) -> CliResult<ExitCode> {
    let root = front_end(path)?;
    println!("{root:#?}");
    Ok(ExitCode::SUCCESS)
}

/// Parse and emit the AST as tagged JSON.
pub fn parse_file_json(path: &Path) -> CliResult<ExitCode> {
    let root = front_end(path)?;
    let json = serde_json::to_string_pretty(&root)
        .map_err(|e| CliError::failure(format!("error serializing AST: {}", e)))?;
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}

/// Run the full front end on a file: load, lex, parse.
fn front_end(path: &Path) -> CliResult<RootNode> {
    let source_text = source::load(path)?;
    let tokens = lexer::lex(&source_text).map_err(|err| render(path, &source_text, err))?;
    tracing::debug!(token_count = tokens.len(), "lexed {}", path.display());
    parser::parse(tokens).map_err(|err| render(path, &source_text, err))
}

/// Render a syntax error as a miette report with source context.
fn render(path: &Path, source_text: &str, err: SyntaxError) -> CliError {
    let report = miette::Report::new(err).with_source_code(NamedSource::new(
        path.to_string_lossy(),
        source_text.to_string(),
    ));
    CliError::failure(format!("{report:?}"))
}
