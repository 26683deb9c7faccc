//! Recursive-descent parser.
//!
//! Grammar:
//!
//! ```text
//! expression := primary (OPERATOR NUMBER UNIT)*
//! primary    := VARIABLE
//! ```

use serde::Deserialize;

use crate::datemath::{Operator, Unit};

use super::ast::Expr;
use super::error::ParseError;
use super::lexer::{Token, TokenKind, tokenize};

/// Parsing limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum length of the raw expression, in characters.
    pub max_expression_length: usize,
    /// Largest accepted interval amount.
    pub max_interval_amount: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_expression_length: 200, max_interval_amount: 10_000 }
    }
}

/// Parse a single expression (without braces).
pub fn parse(input: &str, limits: &Limits) -> Result<Expr, ParseError> {
    let length = input.chars().count();
    if length > limits.max_expression_length {
        return Err(ParseError::TooLong { length, max: limits.max_expression_length });
    }

    let mut parser = Parser { tokens: tokenize(input)?, pos: 0, limits };
    let expr = parser.expression()?;
    parser.finish()?;
    Ok(expr)
}

struct Parser<'src, 'l> {
    tokens: Vec<Token<'src>>,
    pos: usize,
    limits: &'l Limits,
}

impl<'src> Parser<'src, '_> {
    fn peek(&self) -> Token<'src> {
        // The token list always ends with EndOfInput and `advance` never
        // moves past it.
        self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token<'src> {
        let token = self.peek();
        if token.kind != TokenKind::EndOfInput {
            self.pos += 1;
        }
        token
    }

    fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<Token<'src>, ParseError> {
        let token = self.peek();
        if token.kind != kind {
            return Err(ParseError::UnexpectedToken {
                expected,
                found: token.kind,
                text: token.text.to_string(),
                offset: token.offset,
            });
        }
        Ok(self.advance())
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        while self.peek().kind == TokenKind::Operator {
            let op = self.operator()?;
            let amount = self.amount()?;
            let unit = self.unit()?;
            expr = expr.offset(op, amount, unit);
        }

        Ok(expr)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.expect(TokenKind::Variable, "a variable name")?;
        Ok(Expr::variable(token.text))
    }

    fn operator(&mut self) -> Result<Operator, ParseError> {
        let token = self.expect(TokenKind::Operator, "'+' or '-'")?;
        Operator::from_symbol(token.text).ok_or_else(|| ParseError::UnexpectedToken {
            expected: "'+' or '-'",
            found: token.kind,
            text: token.text.to_string(),
            offset: token.offset,
        })
    }

    fn amount(&mut self) -> Result<u32, ParseError> {
        let token = self.expect(TokenKind::Number, "an interval amount")?;
        let max = self.limits.max_interval_amount;
        let too_large = || ParseError::AmountTooLarge {
            amount: token.text.to_string(),
            max,
            offset: token.offset,
        };

        // Digit runs too long for u64 are over any limit.
        let value: u64 = token.text.parse().map_err(|_| too_large())?;
        if value == 0 {
            return Err(ParseError::NonPositiveAmount {
                amount: token.text.to_string(),
                offset: token.offset,
            });
        }

        u32::try_from(value).ok().filter(|v| *v <= max).ok_or_else(too_large)
    }

    fn unit(&mut self) -> Result<Unit, ParseError> {
        let token = self.expect(TokenKind::Unit, "a unit")?;
        Unit::from_keyword(token.text).ok_or_else(|| ParseError::UnknownUnit {
            unit: token.text.to_string(),
            offset: token.offset,
        })
    }

    fn finish(&self) -> Result<(), ParseError> {
        let token = self.peek();
        if token.kind == TokenKind::EndOfInput {
            return Ok(());
        }
        Err(ParseError::TrailingToken {
            found: token.kind,
            text: token.text.to_string(),
            offset: token.offset,
        })
    }
}
