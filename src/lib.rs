//! A tracing expression compiler: every phase of the classic pipeline over a
//! single arithmetic expression, each phase reported as human-readable text.
//!
//! The stages run strictly in sequence, each consuming the previous stage's
//! output:
//! - `tokenizer` turns raw text into a flat token list.
//! - `parser` builds the syntax tree by recursive descent.
//! - `tree_printer`, `semantic_analyzer` and `tac_generator` each read the
//!   tree independently.
//! - `assembly_generator` lowers the TAC lines into pseudo-assembly.

pub mod assembly_generator;
pub mod ast;
pub mod error;
pub mod parser;
pub mod semantic_analyzer;
pub mod tac;
pub mod tac_generator;
pub mod tokenizer;
pub mod tree_printer;
pub mod wire;

use serde::Serialize;
use tracing::debug;

pub use error::{CompileError, LexicalError, SyntaxError};

/// The aggregate of all phase outputs for one compile call.
///
/// Serializes with the wire field names expected by existing callers
/// (`syntaxTree`, `final`).
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseOutputs {
    pub tokens: String,
    pub syntax_tree: String,
    pub semantic: String,
    pub intermediate: String,
    #[serde(rename = "final")]
    pub final_code: String,
}

/// Run the whole pipeline over a single expression.
///
/// Everything is call-local: token list, tree, accumulators and the
/// temporary counter are built fresh here and dropped on return, so
/// concurrent calls cannot leak state into each other. The first failing
/// stage aborts the call.
pub fn compile(expression: &str) -> Result<PhaseOutputs, CompileError> {
    let tokens = tokenizer::tokenize(expression)?;
    debug!(count = tokens.len(), "tokenized expression");

    let tree = parser::parse(&tokens)?;

    let syntax_tree = tree_printer::print_tree(&tree);
    let report = semantic_analyzer::analyze(&tree);
    debug!(
        nodes = report.node_count,
        symbolic = report.is_symbolic(),
        "analyzed syntax tree"
    );

    let tac_lines: Vec<String> = tac_generator::generate_tac(&tree)
        .iter()
        .map(|instruction| instruction.to_string())
        .collect();
    let final_code = assembly_generator::emit(&tac_lines);
    debug!(instructions = tac_lines.len(), "generated code");

    Ok(PhaseOutputs {
        tokens: tokens
            .iter()
            .map(tokenizer::Token::describe)
            .collect::<Vec<String>>()
            .join("\n"),
        syntax_tree: syntax_tree.trim().to_string(),
        semantic: report.to_string(),
        intermediate: tac_lines.join("\n"),
        final_code,
    })
}
