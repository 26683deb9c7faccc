//! Loading variable contexts from YAML or TOML files.
//!
//! A vars file is a flat mapping of names to scalars:
//!
//! ```yaml
//! START: 2026-01-15
//! COUNT: 3
//! OWNER: Agustin
//! ```
//!
//! Numbers and booleans are kept in their textual form; type inference
//! happens later, at resolution time.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::VariableContext;

#[derive(Debug, Error)]
pub enum VarsFileError {
    #[error("failed to read vars file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML vars: {0}")]
    Yaml(#[source] serde_yaml::Error),

    #[error("failed to parse TOML vars: {0}")]
    Toml(#[source] toml::de::Error),

    #[error("variable '{0}' must be a scalar (string, number or boolean)")]
    NotScalar(String),
}

/// Supported vars file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarsFormat {
    Yaml,
    Toml,
}

impl VarsFormat {
    /// Pick a format from the file extension. Anything but `.toml` is YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => VarsFormat::Toml,
            _ => VarsFormat::Yaml,
        }
    }
}

/// Load a vars file, choosing the format by extension.
pub fn load_vars_file(path: &Path) -> Result<VariableContext, VarsFileError> {
    let content = fs::read_to_string(path)
        .map_err(|e| VarsFileError::Io { path: path.to_path_buf(), source: e })?;
    parse_vars(&content, VarsFormat::from_path(path))
}

/// Parse vars from a string in the given format.
pub fn parse_vars(content: &str, format: VarsFormat) -> Result<VariableContext, VarsFileError> {
    match format {
        VarsFormat::Yaml => parse_yaml(content),
        VarsFormat::Toml => parse_toml(content),
    }
}

fn parse_yaml(content: &str) -> Result<VariableContext, VarsFileError> {
    use serde_yaml::Value;

    if content.trim().is_empty() {
        return Ok(VariableContext::new());
    }

    let map: std::collections::HashMap<String, Value> =
        serde_yaml::from_str(content).map_err(VarsFileError::Yaml)?;

    map.into_iter()
        .map(|(name, value)| {
            let raw = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                _ => return Err(VarsFileError::NotScalar(name)),
            };
            Ok((name, raw))
        })
        .collect()
}

fn parse_toml(content: &str) -> Result<VariableContext, VarsFileError> {
    use toml::Value;

    let table: toml::Table = toml::from_str(content).map_err(VarsFileError::Toml)?;

    table
        .into_iter()
        .map(|(name, value)| {
            let raw = match value {
                Value::String(s) => s,
                Value::Integer(i) => i.to_string(),
                Value::Float(f) => f.to_string(),
                Value::Boolean(b) => b.to_string(),
                Value::Datetime(dt) => dt.to_string(),
                Value::Array(_) | Value::Table(_) => {
                    return Err(VarsFileError::NotScalar(name));
                }
            };
            Ok((name, raw))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_scalars() {
        let yaml = r#"
START: 2026-01-15
COUNT: 3
RATE: 2.5
OWNER: "Agustin"
ACTIVE: true
EMPTY:
"#;
        let ctx = parse_vars(yaml, VarsFormat::Yaml).unwrap();
        assert_eq!(ctx["START"], "2026-01-15");
        assert_eq!(ctx["COUNT"], "3");
        assert_eq!(ctx["RATE"], "2.5");
        assert_eq!(ctx["OWNER"], "Agustin");
        assert_eq!(ctx["ACTIVE"], "true");
        assert_eq!(ctx["EMPTY"], "");
    }

    #[test]
    fn test_parse_yaml_rejects_nested() {
        let yaml = "NESTED:\n  a: 1\n";
        let err = parse_vars(yaml, VarsFormat::Yaml).unwrap_err();
        assert!(matches!(err, VarsFileError::NotScalar(ref n) if n == "NESTED"));
    }

    #[test]
    fn test_parse_empty_yaml() {
        assert!(parse_vars("", VarsFormat::Yaml).unwrap().is_empty());
    }

    #[test]
    fn test_parse_toml_scalars() {
        let toml = r#"
START = 2026-01-15
DUE = "2026-02-01"
COUNT = 3
"#;
        let ctx = parse_vars(toml, VarsFormat::Toml).unwrap();
        assert_eq!(ctx["START"], "2026-01-15");
        assert_eq!(ctx["DUE"], "2026-02-01");
        assert_eq!(ctx["COUNT"], "3");
    }

    #[test]
    fn test_parse_toml_rejects_arrays() {
        let err = parse_vars("LIST = [1, 2]\n", VarsFormat::Toml).unwrap_err();
        assert!(matches!(err, VarsFileError::NotScalar(ref n) if n == "LIST"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(VarsFormat::from_path(Path::new("vars.toml")), VarsFormat::Toml);
        assert_eq!(VarsFormat::from_path(Path::new("vars.TOML")), VarsFormat::Toml);
        assert_eq!(VarsFormat::from_path(Path::new("vars.yaml")), VarsFormat::Yaml);
        assert_eq!(VarsFormat::from_path(Path::new("vars")), VarsFormat::Yaml);
    }
}
