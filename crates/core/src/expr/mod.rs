//! The expression language inside `{{...}}` tokens.
//!
//! Pipeline: [`lexer::tokenize`] -> [`parser::parse`] -> [`eval::evaluate`].
//!
//! ```text
//! DATE + 1 month - 2 days
//! START_DATE + 3 weeks
//! ```

pub mod ast;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;

pub use ast::Expr;
pub use error::{ErrorCode, EvalError, ExprError, ParseError};
pub use eval::{evaluate, evaluate_value};
pub use lexer::{Token, TokenKind, tokenize};
pub use parser::{Limits, parse};
