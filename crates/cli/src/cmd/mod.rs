pub mod doctor;
pub mod eval;
pub mod extract;
pub mod render;
pub mod validate;

use std::io::Read;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use datexpr_core::VariableContext;
use datexpr_core::vars::{VarsFileError, load_vars_file};

use crate::VarArgs;

/// Build the variable context: vars file first, then `--var` overrides.
pub fn build_context(args: &VarArgs) -> Result<VariableContext, VarsFileError> {
    let mut ctx = match args.vars_file {
        Some(ref path) => load_vars_file(path)?,
        None => VariableContext::new(),
    };
    for (name, value) in &args.vars {
        ctx.insert(name.clone(), value.clone());
    }
    Ok(ctx)
}

/// Read a file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .wrap_err_with(|| format!("failed to read {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).wrap_err("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Flush logs and exit with `code`.
pub fn exit(code: i32) -> ! {
    crate::logging::flush();
    std::process::exit(code)
}
