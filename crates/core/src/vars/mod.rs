//! Variable values and their resolution.
//!
//! Variables come from two places:
//! - A per-call [`VariableContext`] of raw strings supplied by the caller
//! - [`SystemVariables`], built-in date providers such as `DATE`
//!
//! Caller values always shadow system variables of the same name.

pub mod file;
pub mod resolver;
pub mod system;
pub mod value;

use std::collections::HashMap;

/// Caller-supplied variables, name to raw string value.
pub type VariableContext = HashMap<String, String>;

pub use file::{VarsFileError, load_vars_file, parse_vars};
pub use resolver::Resolver;
pub use system::{DateProvider, SystemVariables};
pub use value::Value;
