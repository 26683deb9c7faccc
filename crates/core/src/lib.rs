//! Variable substitution and calendar date arithmetic for `{{...}}`
//! expressions embedded in text.
//!
//! ```
//! use datexpr_core::{Engine, VariableContext};
//!
//! let mut ctx = VariableContext::new();
//! ctx.insert("START".into(), "2026-01-31".into());
//!
//! let out = Engine::default().process_text("Review on {{START + 1 month}}", &ctx);
//! assert_eq!(out.text, "Review on 2026-02-28");
//! assert!(out.errors.is_empty());
//! ```

pub mod config {
    pub mod loader;
    pub mod types;
}
pub mod datemath;
pub mod engine;
pub mod expr;
pub mod vars;

pub use engine::{
    Engine, ExpressionError, ProcessResult, Validation, extract_expressions, strip_braces,
};
pub use expr::{ErrorCode, EvalError, Expr, ExprError, Limits, ParseError, evaluate, parse};
pub use vars::{SystemVariables, Value, VariableContext};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
