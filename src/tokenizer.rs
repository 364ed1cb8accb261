use crate::error::{CompileError, LexicalError};
use regex::Regex;
use std::fmt;
use std::ops::Range;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub range: Option<Range<usize>>,
}

impl Token {
    /// One trace line per token: kind name padded to 8 columns, then the text.
    pub fn describe(&self) -> String {
        format!("{:<8} {}", self.kind.name(), self.text)
    }
}

/// Simpler printing format for tokens.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Custom PartialEq for easier testing.
impl PartialEq for Token {
    /// Token ranges are not compared, if either of them is none.
    fn eq(&self, other: &Self) -> bool {
        if self.range.is_none() || other.range.is_none() {
            self.text == other.text && self.kind == other.kind
        } else {
            self.text == other.text && self.kind == other.kind && self.range == other.range
        }
    }
}

/// The order of these variants matters: it is the match priority.
/// WhiteSpace must come first so blanks never reach the invalid-character
/// fallback.
#[derive(Debug, PartialEq, EnumIter, Clone)]
pub enum TokenKind {
    WhiteSpace,
    Number,
    Identifier,
    Operator,
}

impl TokenKind {
    /// Get regex pattern for the specific TokenKind.
    pub fn pattern(&self) -> Regex {
        match self {
            // Starts on a digit, or on '.' immediately followed by a digit,
            // then greedily takes digits and dots. Dot-count validation
            // happens in tokenize().
            Self::Number => Regex::new(r"^(?:[0-9]|\.[0-9])[0-9.]*").unwrap(),
            Self::Identifier => Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*").unwrap(),
            Self::Operator => Regex::new(r"^[+\-*/()]").unwrap(),
            Self::WhiteSpace => Regex::new(r"^\s+").unwrap(),
        }
    }

    /// Returns whether a specific TokenKind should be ignored in tokenization.
    pub fn ignore(&self) -> bool {
        matches!(self, Self::WhiteSpace)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::WhiteSpace => "SPACE",
            Self::Number => "NUMBER",
            Self::Identifier => "IDENTIFIER",
            Self::Operator => "OPERATOR",
        }
    }
}

/// Scan the source left to right into tokens, failing on the first invalid
/// character or malformed number.
pub fn tokenize(source: &str) -> Result<Vec<Token>, CompileError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut position: usize = 0;

    'scan: while position < source.len() {
        for kind in TokenKind::iter() {
            if let Some(re_match) = kind.pattern().find(&source[position..]) {
                let start = position + re_match.start();
                let end = position + re_match.end();
                if !kind.ignore() {
                    let text = &source[start..end];
                    if kind == TokenKind::Number && text.matches('.').count() > 1 {
                        return Err(LexicalError::MultipleDots.into());
                    }
                    tokens.push(Token {
                        text: text.to_string(),
                        kind,
                        range: Some(start..end),
                    });
                }
                position = end;
                continue 'scan;
            }
        }
        let character = source[position..]
            .chars()
            .next()
            .expect("Cursor is inside the source");
        return Err(LexicalError::InvalidCharacter {
            character,
            position: source[..position].chars().count() + 1,
        }
        .into());
    }
    Ok(tokens)
}
