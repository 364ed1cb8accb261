//! JSON boundary for transport adapters.
//!
//! The crate does not serve HTTP itself; a transport hands the raw request
//! body to [`handle_compile`] and sends the returned JSON value back. This
//! keeps the mapping from pipeline results to wire fields in one place.

use serde_json::{json, Value};
use thiserror::Error;
use tracing::warn;

use crate::compile;

/// A malformed call, as opposed to a failure inside the pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum RequestValidationError {
    #[error("Request body is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("Missing field 'expression'")]
    MissingExpression,
    #[error("Field 'expression' must be a string")]
    NonStringExpression,
}

fn expression_field(body: &str) -> Result<String, RequestValidationError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|error| RequestValidationError::InvalidJson(error.to_string()))?;
    match payload.get("expression") {
        Some(Value::String(expression)) => Ok(expression.clone()),
        Some(_) => Err(RequestValidationError::NonStringExpression),
        None => Err(RequestValidationError::MissingExpression),
    }
}

/// Map a raw request body to the JSON value a transport should respond with.
///
/// Success carries the five phase fields; any failure carries a single
/// `error` string describing the first problem encountered.
pub fn handle_compile(body: &str) -> Value {
    let expression = match expression_field(body) {
        Ok(expression) => expression,
        Err(error) => {
            warn!(%error, "rejected malformed compile request");
            return json!({ "error": error.to_string() });
        }
    };

    match compile(&expression) {
        Ok(outputs) => json!({
            "tokens": outputs.tokens,
            "syntaxTree": outputs.syntax_tree,
            "semantic": outputs.semantic,
            "intermediate": outputs.intermediate,
            "final": outputs.final_code,
        }),
        Err(error) => {
            warn!(category = error.category(), %error, "compilation failed");
            json!({ "error": error.to_string() })
        }
    }
}
