//! Expression evaluation.

use crate::datemath::apply_interval;
use crate::vars::{Resolver, SystemVariables, Value, VariableContext};

use super::ast::Expr;
use super::error::EvalError;

/// Evaluate `expr` and format the result for substitution.
pub fn evaluate(
    expr: &Expr,
    context: &VariableContext,
    system: &SystemVariables,
) -> Result<String, EvalError> {
    let resolver = Resolver::new(context, system);
    evaluate_value(expr, &resolver).map(|value| value.to_string())
}

/// Evaluate `expr` to a typed value.
pub fn evaluate_value(expr: &Expr, resolver: &Resolver<'_>) -> Result<Value, EvalError> {
    match expr {
        Expr::Variable { name } => resolver
            .resolve(name)
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone() }),
        Expr::DateArithmetic { base, op, amount, unit } => {
            let value = evaluate_value(base, resolver)?;
            let Some(date) = value.as_date() else {
                return Err(EvalError::TypeMismatch {
                    expression: base.to_string(),
                    found: value.type_name(),
                });
            };

            apply_interval(date, *amount, *unit, *op)
                .map(Value::Date)
                .ok_or_else(|| EvalError::OutOfRange { expression: expr.to_string() })
        }
    }
}
