//! Variable lookup against caller and system variables.

use super::{SystemVariables, Value, VariableContext};

/// Resolves variable names for a single evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    context: &'a VariableContext,
    system: &'a SystemVariables,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(context: &'a VariableContext, system: &'a SystemVariables) -> Self {
        Self { context, system }
    }

    /// Look up `name`, caller context first, then system variables.
    ///
    /// Caller values go through type inference; system providers always
    /// yield a date and are invoked at most once per call.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Value> {
        if let Some(raw) = self.context.get(name) {
            return Some(Value::infer(raw));
        }
        self.system.get(name).map(Value::Date)
    }
}
