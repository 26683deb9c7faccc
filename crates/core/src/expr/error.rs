//! Error types for expression parsing and evaluation.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::lexer::TokenKind;

/// Stable error codes reported for a failed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ExpressionTooLong,
    ParseError,
    UndefinedVariable,
    TypeError,
    EvaluationError,
}

impl ErrorCode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ExpressionTooLong => "EXPRESSION_TOO_LONG",
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::UndefinedVariable => "UNDEFINED_VARIABLE",
            ErrorCode::TypeError => "TYPE_ERROR",
            ErrorCode::EvaluationError => "EVALUATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while tokenizing or parsing an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expression is {length} characters long, maximum is {max}")]
    TooLong { length: usize, max: usize },

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("expected {expected} at offset {offset}, found {}", describe(.found, .text))]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        text: String,
        offset: usize,
    },

    #[error("interval amount must be a positive integer, found '{amount}' at offset {offset}")]
    NonPositiveAmount { amount: String, offset: usize },

    #[error("interval amount '{amount}' at offset {offset} exceeds the maximum of {max}")]
    AmountTooLarge { amount: String, max: u32, offset: usize },

    #[error(
        "unknown unit '{unit}' at offset {offset}, expected one of: day, days, week, weeks, month, months, year, years"
    )]
    UnknownUnit { unit: String, offset: usize },

    #[error("unexpected trailing {} at offset {offset}", describe(.found, .text))]
    TrailingToken { found: TokenKind, text: String, offset: usize },
}

fn describe(kind: &TokenKind, text: &str) -> String {
    match kind {
        TokenKind::EndOfInput => kind.to_string(),
        _ => format!("{kind} '{text}'"),
    }
}

impl ParseError {
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::TooLong { .. } => ErrorCode::ExpressionTooLong,
            _ => ErrorCode::ParseError,
        }
    }

    /// Text of the offending token, when one exists.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self {
            ParseError::TooLong { .. } => None,
            ParseError::UnexpectedChar { ch, .. } => Some(ch.to_string()),
            ParseError::UnexpectedToken { text, .. }
            | ParseError::TrailingToken { text, .. } => Some(text.clone()),
            ParseError::NonPositiveAmount { amount, .. }
            | ParseError::AmountTooLarge { amount, .. } => Some(amount.clone()),
            ParseError::UnknownUnit { unit, .. } => Some(unit.clone()),
        }
    }

    /// Offset into the trimmed expression.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::TooLong { .. } => None,
            ParseError::UnexpectedChar { offset, .. }
            | ParseError::UnexpectedToken { offset, .. }
            | ParseError::NonPositiveAmount { offset, .. }
            | ParseError::AmountTooLarge { offset, .. }
            | ParseError::UnknownUnit { offset, .. }
            | ParseError::TrailingToken { offset, .. } => Some(*offset),
        }
    }
}

/// Errors raised while evaluating a parsed expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("cannot apply date arithmetic to '{expression}': expected date, found {found}")]
    TypeMismatch { expression: String, found: &'static str },

    #[error("date out of range evaluating '{expression}'")]
    OutOfRange { expression: String },
}

impl EvalError {
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UndefinedVariable { .. } => ErrorCode::UndefinedVariable,
            EvalError::TypeMismatch { .. } => ErrorCode::TypeError,
            EvalError::OutOfRange { .. } => ErrorCode::EvaluationError,
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self {
            EvalError::UndefinedVariable { name } => Some(name.clone()),
            EvalError::TypeMismatch { expression, .. }
            | EvalError::OutOfRange { expression } => Some(expression.clone()),
        }
    }
}

/// Either stage of expression processing failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl ExprError {
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            ExprError::Parse(e) => e.code(),
            ExprError::Eval(e) => e.code(),
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self {
            ExprError::Parse(e) => e.token(),
            ExprError::Eval(e) => e.token(),
        }
    }

    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            ExprError::Parse(e) => e.offset(),
            ExprError::Eval(_) => None,
        }
    }
}
