use std::fs;

use color_eyre::eyre::{Result, WrapErr};
use datexpr_core::config::types::ResolvedConfig;
use tracing::debug;

use super::{build_context, exit, read_input};
use crate::RenderArgs;

pub fn run(cfg: &ResolvedConfig, args: &RenderArgs) -> Result<()> {
    let ctx = match build_context(&args.vars) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("FAIL dxp render");
            eprintln!("{e}");
            exit(1);
        }
    };

    let input = read_input(args.file.as_deref())?;
    let engine = cfg.engine(args.vars.date);
    let result = engine.process_text(&input, &ctx);
    debug!(errors = result.errors.len(), "rendered input");

    if let Some(ref path) = args.output {
        fs::write(path, &result.text)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        if args.output.is_none() {
            print!("{}", result.text);
        }
        for e in &result.errors {
            eprintln!("{}: {} in {}", e.code, e.message, e.expression);
        }
    }

    if args.strict && !result.is_ok() {
        exit(1);
    }
    Ok(())
}
