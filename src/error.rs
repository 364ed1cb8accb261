use thiserror::Error;

/// Any failure the compilation pipeline can surface to a caller.
///
/// The pipeline is fail-fast: the first error aborts the remaining phases
/// and nothing partial is returned.
#[derive(Debug, Error, PartialEq)]
pub enum CompileError {
    #[error("Lexical error: {0}")]
    Lexical(#[from] LexicalError),
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl CompileError {
    /// Short classification string used for logging.
    pub fn category(&self) -> &'static str {
        match self {
            CompileError::Lexical(_) => "lexical",
            CompileError::Syntax(_) => "syntax",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LexicalError {
    #[error("Invalid number format: multiple dots")]
    MultipleDots,
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum SyntaxError {
    #[error("Unexpected end of input")]
    UnexpectedEof,
    #[error("Expected {expected}, got '{found}'")]
    UnexpectedToken { expected: String, found: String },
    #[error("Extra tokens after expression, starting at '{found}'")]
    TrailingTokens { found: String },
}
