//! Implements a parser for CCL checker conditions.
//!
//! The module provides a parser for conditions by implementing [`FromStr`] for
//! [`Condition`]. The parser is often used implicitly through [`parse`] method.
//!
//! **Example**:
//! The following example parses a string into a [`Condition`]:
//! ```rust
//! use ccl_logic::syntax::Condition;
//!
//! let condition: Condition = r#"
//!     AND {
//!         ('The input request is not null'),
//!         NOT { ('The user account is locked') }
//!     }
//! "#.parse().unwrap();
//!
//! assert_eq!(
//!     "AND {\n  ('The input request is not null'),\n  NOT { ('The user account is locked') }\n}",
//!     condition.to_string()
//! );
//! ```
//!
//! [`Condition`]: crate::syntax::Condition
//! [`FromStr`]: std::str::FromStr
//! [`parse`]: ::std::str#parse
use super::syntax::Condition;
use lalrpop_util::ParseError;
use std::str::FromStr;
use thiserror::Error;

lalrpop_mod!(pub grammar); // synthesized by LALRPOP

#[derive(PartialEq, Debug)]
pub enum TokenType {
    And,
    Or,
    Not,
    Exists,
    Forall,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Description,
    Unknown,
}

impl<S: AsRef<str>> From<S> for TokenType {
    fn from(s: S) -> Self {
        let s = s.as_ref();
        match s.trim_matches('"') {
            "AND" => Self::And,
            "OR" => Self::Or,
            "NOT" => Self::Not,
            "EXISTS" => Self::Exists,
            "FORALL" => Self::Forall,
            "(" => Self::LParen,
            ")" => Self::RParen,
            "{" => Self::LBrace,
            "}" => Self::RBrace,
            "," => Self::Comma,
            _ if s.starts_with("r#") || s.starts_with("r\"") => Self::Description,
            _ => Self::Unknown,
        }
    }
}

impl ToString for TokenType {
    fn to_string(&self) -> String {
        match self {
            Self::And => "`AND`",
            Self::Or => "`OR`",
            Self::Not => "`NOT`",
            Self::Exists => "`EXISTS`",
            Self::Forall => "`FORALL`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::LBrace => "`{`",
            Self::RBrace => "`}`",
            Self::Comma => "`,`",
            Self::Description => "`quoted description`",
            Self::Unknown => "`unknown token`",
        }
        .into()
    }
}

/// Is the type of errors returned by the parser.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    #[error("found `{found}` at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected),
    )]
    UnrecognizedToken {
        position: Position,
        expected: Vec<TokenType>,
        found: String,
    },
    #[error("invalid token at line {}, column {}", (*.position).line, (*.position).column)]
    InvalidToken { position: Position },
    #[error("unexpected end of input at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected)
    )]
    UnrecognizedEOF {
        position: Position,
        expected: Vec<TokenType>,
    },
    #[error("unexpected token `{found}` at line {}, column {}", (*.position).line, (*.position).column)]
    ExtraToken { position: Position, found: String },
    #[error("{message}")]
    User { message: String },
}

impl Error {
    fn pretty_expected_tokens(items: &[TokenType]) -> String {
        let strs = items.iter().map(ToString::to_string).collect::<Vec<_>>();
        match items.len() {
            0 => "".into(),
            1 => strs[0].to_string(),
            2 => format!("{} or {}", strs[0], strs[1]),
            n => format!("{}, or {}", strs[0..n - 1].join(", "), strs[n - 1]),
        }
    }

    /// Returns the position of the error in the source, if the error has one.
    pub fn position(&self) -> Option<&Position> {
        match self {
            Self::UnrecognizedToken { position, .. }
            | Self::InvalidToken { position }
            | Self::UnrecognizedEOF { position, .. }
            | Self::ExtraToken { position, .. } => Some(position),
            Self::User { .. } => None,
        }
    }
}

/// Is a 1-based line and column in the source text.
#[derive(PartialEq, Debug)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

// Stores source information to retrieve token positions in the source.
struct SourceInfo<'s> {
    lines: Vec<usize>,
    source: &'s str,
}

impl<'s> SourceInfo<'s> {
    fn new(source: &'s str) -> Self {
        let lines = source
            .bytes()
            .enumerate()
            .filter(|&(_, ch)| ch == b'\n')
            .map(|(i, _)| i + 1);
        Self {
            lines: std::iter::once(0).chain(lines).collect(),
            source,
        }
    }

    fn position(&self, location: usize) -> Position {
        let index = self
            .lines
            .iter()
            .enumerate()
            .find(|&(_, l)| location < *l)
            .map(|(i, _)| i);
        let line = index.unwrap_or_else(|| self.lines.len());
        let column = self.source[self.lines[line - 1]..location].chars().count() + 1;

        Position { line, column }
    }

    fn convert_error<T: ToString, E: ToString>(&self, error: ParseError<usize, T, E>) -> Error {
        match error {
            ParseError::InvalidToken { location } => Error::InvalidToken {
                position: self.position(location),
            },
            ParseError::UnrecognizedEOF { location, expected } => Error::UnrecognizedEOF {
                position: self.position(location),
                expected: expected.into_iter().map(From::from).collect(),
            },
            ParseError::UnrecognizedToken { token, expected } => Error::UnrecognizedToken {
                position: self.position(token.0),
                expected: expected.into_iter().map(From::from).collect(),
                found: token.1.to_string(),
            },
            ParseError::ExtraToken { token } => Error::ExtraToken {
                position: self.position(token.0),
                found: token.1.to_string(),
            },
            ParseError::User { error } => Error::User {
                message: error.to_string(),
            },
        }
    }
}

/// Returns the deepest nesting of braces and parentheses in `source`, ignoring the contents of
/// quoted descriptions. For a well-formed condition this is the depth of its parse tree, so
/// oversized input can be rejected before any tree is built.
pub fn nesting_depth(source: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0;
    let mut quoted = false;
    for ch in source.chars() {
        match ch {
            '\'' => quoted = !quoted,
            '\n' | '\r' => quoted = false,
            _ if quoted => (),
            '{' | '(' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            '}' | ')' => depth = depth.saturating_sub(1),
            _ => (),
        }
    }
    deepest
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let info = SourceInfo::new(s);
        grammar::CheckParser::new()
            .parse(s)
            .map_err(|e| info.convert_error(e))
    }
}
