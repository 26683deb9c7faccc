use datexpr_core::config::types::ResolvedConfig;
use datexpr_core::strip_braces;

use super::{build_context, exit};
use crate::EvalArgs;

pub fn run(cfg: &ResolvedConfig, args: &EvalArgs) {
    let ctx = match build_context(&args.vars) {
        Ok(ctx) => ctx,
        Err(e) => {
            println!("FAIL dxp eval");
            println!("{e}");
            exit(1);
        }
    };

    let engine = cfg.engine(args.vars.date);
    match engine.evaluate_expression(strip_braces(&args.expression), &ctx) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            println!("FAIL dxp eval");
            println!("{}: {e}", e.code());
            exit(1);
        }
    }
}
