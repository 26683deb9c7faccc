//! Substitution of `{{...}}` expression tokens in text.
//!
//! Each token is parsed and evaluated on its own. A failing token is left
//! in the output unchanged and reported as an [`ExpressionError`]; the rest
//! of the text is still processed.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

use crate::expr::{ErrorCode, Expr, ExprError, Limits, ParseError, evaluate, parse};
use crate::vars::{SystemVariables, VariableContext};

/// Non-greedy up to the first `}}`. Nested braces are not supported.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("valid regex"));

/// A failed expression, as reported by [`Engine::process_text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressionError {
    /// The raw token, braces included.
    pub expression: String,
    pub code: ErrorCode,
    pub message: String,
    /// Text of the offending token inside the expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Character position of that token within the trimmed expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl ExpressionError {
    #[must_use]
    pub fn new(expression: &str, error: &ExprError) -> Self {
        Self {
            expression: expression.to_string(),
            code: error.code(),
            message: error.to_string(),
            token: error.token(),
            offset: error.offset(),
        }
    }
}

/// Output of a full substitution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessResult {
    pub text: String,
    pub errors: Vec<ExpressionError>,
}

impl ProcessResult {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Result of a syntax-only check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Expression engine with fixed limits and system variables.
///
/// The engine holds no mutable state, so one instance can serve any number
/// of calls, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    limits: Limits,
    system: SystemVariables,
}

impl Engine {
    #[must_use]
    pub fn new(limits: Limits) -> Self {
        Self { limits, system: SystemVariables::default() }
    }

    /// Replace the system variables (e.g. to pin `DATE`).
    #[must_use]
    pub fn with_system_variables(mut self, system: SystemVariables) -> Self {
        self.system = system;
        self
    }

    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    #[must_use]
    pub fn system_variables(&self) -> &SystemVariables {
        &self.system
    }

    /// Parse one expression (no braces) with this engine's limits.
    pub fn parse(&self, expression: &str) -> Result<Expr, ParseError> {
        parse(expression, &self.limits)
    }

    /// Parse and evaluate one expression (no braces).
    pub fn evaluate_expression(
        &self,
        expression: &str,
        context: &VariableContext,
    ) -> Result<String, ExprError> {
        let expr = self.parse(expression)?;
        Ok(evaluate(&expr, context, &self.system)?)
    }

    /// Substitute every `{{...}}` token in `text`.
    pub fn process_text(&self, text: &str, context: &VariableContext) -> ProcessResult {
        let mut errors = Vec::new();

        let rendered = TOKEN_RE.replace_all(text, |caps: &Captures<'_>| {
            let token = &caps[0];
            match self.evaluate_expression(caps[1].trim(), context) {
                Ok(value) => {
                    debug!(token, %value, "substituted expression");
                    value
                }
                Err(e) => {
                    debug!(token, code = %e.code(), "expression failed: {e}");
                    errors.push(ExpressionError::new(token, &e));
                    token.to_string()
                }
            }
        });

        ProcessResult { text: rendered.into_owned(), errors }
    }

    /// All raw `{{...}}` tokens in `text`, left to right, braces included.
    #[must_use]
    pub fn extract_expressions(&self, text: &str) -> Vec<String> {
        extract_expressions(text)
    }

    /// Check the syntax of one expression, with or without braces.
    ///
    /// Variables are not resolved, so undefined names still validate.
    #[must_use]
    pub fn validate_expression(&self, expression: &str) -> Validation {
        match self.parse(strip_braces(expression)) {
            Ok(_) => Validation { valid: true, error: None },
            Err(e) => Validation { valid: false, error: Some(e.to_string()) },
        }
    }

    /// Unique variable names used by the syntactically valid tokens of
    /// `text`, in order of first use.
    #[must_use]
    pub fn referenced_variables(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();

        for caps in TOKEN_RE.captures_iter(text) {
            let Ok(expr) = self.parse(caps[1].trim()) else {
                continue;
            };
            let name = expr.root_variable();
            if seen.insert(name.to_string()) {
                names.push(name.to_string());
            }
        }

        names
    }
}

/// All raw `{{...}}` tokens in `text`, left to right, braces included.
///
/// Repeated tokens are returned once per occurrence.
#[must_use]
pub fn extract_expressions(text: &str) -> Vec<String> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Strip one pair of surrounding `{{ }}` if present, then trim.
#[must_use]
pub fn strip_braces(token: &str) -> &str {
    let trimmed = token.trim();
    trimmed
        .strip_prefix("{{")
        .and_then(|s| s.strip_suffix("}}"))
        .unwrap_or(trimmed)
        .trim()
}
