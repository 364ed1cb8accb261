use crate::ast::Expr;
use crate::error::{CompileError, SyntaxError};
use crate::tokenizer::{Token, TokenKind};
use std::iter::Peekable;
use std::slice::Iter;

/// Parse a token sequence into a single expression.
///
/// Grammar, lowest precedence first, binary operators left-associative:
/// ```text
/// expression := term ( ('+' | '-') term )*
/// term       := factor ( ('*' | '/') factor )*
/// factor     := NUMBER | IDENTIFIER | '(' expression ')' | '-' factor
/// ```
pub fn parse(tokens: &[Token]) -> Result<Expr, CompileError> {
    let mut iter = tokens.iter().peekable();
    let expression = parse_expression(&mut iter)?;

    // Without this check `2 3` would silently parse only the first term.
    if let Some(token) = iter.peek() {
        return Err(SyntaxError::TrailingTokens {
            found: token.text.clone(),
        }
        .into());
    }
    Ok(*expression)
}

fn parse_expression(iter: &mut Peekable<Iter<'_, Token>>) -> Result<Box<Expr>, CompileError> {
    let mut left = parse_term(iter)?;
    while let Some(token) = iter.peek() {
        if !["+", "-"].contains(&token.text.as_str()) {
            break;
        }
        let operation = consume(iter)?;
        let right = parse_term(iter)?;
        left = Expr::BinaryOperation {
            left,
            operation,
            right,
        }
        .into();
    }
    Ok(left)
}

fn parse_term(iter: &mut Peekable<Iter<'_, Token>>) -> Result<Box<Expr>, CompileError> {
    let mut left = parse_factor(iter)?;
    while let Some(token) = iter.peek() {
        if !["*", "/"].contains(&token.text.as_str()) {
            break;
        }
        let operation = consume(iter)?;
        let right = parse_factor(iter)?;
        left = Expr::BinaryOperation {
            left,
            operation,
            right,
        }
        .into();
    }
    Ok(left)
}

fn parse_factor(iter: &mut Peekable<Iter<'_, Token>>) -> Result<Box<Expr>, CompileError> {
    let token = match iter.peek() {
        Some(token) => *token,
        None => return Err(SyntaxError::UnexpectedEof.into()),
    };

    match token.text.as_str() {
        "(" => return parse_parenthesized(iter),
        "-" => return parse_negation(iter),
        _ => {} // Continue according to token kind
    }

    match token.kind {
        TokenKind::Number => Ok(Expr::Literal {
            value: consume(iter)?,
        }
        .into()),
        TokenKind::Identifier => Ok(Expr::Identifier {
            name: consume(iter)?,
        }
        .into()),
        _ => Err(SyntaxError::UnexpectedToken {
            expected: "a number, an identifier, '(' or '-'".to_string(),
            found: token.text.clone(),
        }
        .into()),
    }
}

fn parse_parenthesized(iter: &mut Peekable<Iter<'_, Token>>) -> Result<Box<Expr>, CompileError> {
    expect(iter, "(")?;
    let expression = parse_expression(iter)?;
    expect(iter, ")")?;
    Ok(expression)
}

/// Unary minus recurses on factor, so it stacks (`--x`) and binds tighter
/// than any binary operator.
fn parse_negation(iter: &mut Peekable<Iter<'_, Token>>) -> Result<Box<Expr>, CompileError> {
    expect(iter, "-")?;
    let target = parse_factor(iter)?;
    Ok(Expr::Negation { target }.into())
}

/// Take the next token unconditionally.
fn consume(iter: &mut Peekable<Iter<'_, Token>>) -> Result<String, CompileError> {
    match iter.next() {
        Some(token) => Ok(token.text.clone()),
        None => Err(SyntaxError::UnexpectedEof.into()),
    }
}

/// Take the next token, which must have exactly the expected text.
fn expect(iter: &mut Peekable<Iter<'_, Token>>, expected: &str) -> Result<String, CompileError> {
    match iter.next() {
        Some(token) if token.text == expected => Ok(token.text.clone()),
        Some(token) => Err(SyntaxError::UnexpectedToken {
            expected: format!("'{expected}'"),
            found: token.text.clone(),
        }
        .into()),
        None => Err(SyntaxError::UnexpectedEof.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn parse_source(source: &str) -> Result<Expr, CompileError> {
        parse(&tokenize(source).expect("test source must tokenize"))
    }

    #[test]
    fn test_literal() {
        assert_eq!(
            parse_source("5").unwrap(),
            Expr::Literal { value: "5".into() }
        );
    }

    #[test]
    fn test_identifier() {
        assert_eq!(
            parse_source("banana").unwrap(),
            Expr::Identifier {
                name: "banana".into()
            }
        );
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            parse_source("2+3*4").unwrap(),
            Expr::BinaryOperation {
                left: Expr::Literal { value: "2".into() }.into(),
                operation: "+".into(),
                right: Expr::BinaryOperation {
                    left: Expr::Literal { value: "3".into() }.into(),
                    operation: "*".into(),
                    right: Expr::Literal { value: "4".into() }.into(),
                }
                .into(),
            }
        );
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(
            parse_source("8-3-2").unwrap(),
            Expr::BinaryOperation {
                left: Expr::BinaryOperation {
                    left: Expr::Literal { value: "8".into() }.into(),
                    operation: "-".into(),
                    right: Expr::Literal { value: "3".into() }.into(),
                }
                .into(),
                operation: "-".into(),
                right: Expr::Literal { value: "2".into() }.into(),
            }
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(
            parse_source("(2+3)*4").unwrap(),
            Expr::BinaryOperation {
                left: Expr::BinaryOperation {
                    left: Expr::Literal { value: "2".into() }.into(),
                    operation: "+".into(),
                    right: Expr::Literal { value: "3".into() }.into(),
                }
                .into(),
                operation: "*".into(),
                right: Expr::Literal { value: "4".into() }.into(),
            }
        );
    }

    #[test]
    fn test_stacked_negation() {
        assert_eq!(
            parse_source("--x").unwrap(),
            Expr::Negation {
                target: Expr::Negation {
                    target: Expr::Identifier { name: "x".into() }.into(),
                }
                .into(),
            }
        );
    }

    #[test]
    fn test_negation_binds_tighter_than_binary() {
        assert_eq!(
            parse_source("-2*3").unwrap(),
            Expr::BinaryOperation {
                left: Expr::Negation {
                    target: Expr::Literal { value: "2".into() }.into(),
                }
                .into(),
                operation: "*".into(),
                right: Expr::Literal { value: "3".into() }.into(),
            }
        );
    }

    #[test]
    fn test_unmatched_parenthesis() {
        assert_eq!(
            parse_source("(2+3").unwrap_err(),
            SyntaxError::UnexpectedEof.into()
        );
        assert_eq!(
            parse_source("(2+3))").unwrap_err(),
            SyntaxError::TrailingTokens { found: ")".into() }.into()
        );
    }

    #[test]
    fn test_trailing_tokens() {
        assert_eq!(
            parse_source("2 3").unwrap_err(),
            SyntaxError::TrailingTokens { found: "3".into() }.into()
        );
    }

    #[test]
    fn test_parsing_nothing() {
        assert_eq!(parse(&[]).unwrap_err(), SyntaxError::UnexpectedEof.into());
    }

    #[test]
    fn test_operator_where_operand_expected() {
        assert_eq!(
            parse_source("2+*3").unwrap_err(),
            SyntaxError::UnexpectedToken {
                expected: "a number, an identifier, '(' or '-'".into(),
                found: "*".into(),
            }
            .into()
        );
    }
}
