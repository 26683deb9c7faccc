use datexpr_core::config::types::ResolvedConfig;

use super::exit;
use crate::ValidateArgs;

pub fn run(cfg: &ResolvedConfig, args: &ValidateArgs) {
    let engine = cfg.engine(None);
    let mut failed = 0usize;

    for expression in &args.expressions {
        let validation = engine.validate_expression(expression);
        match validation.error {
            None => println!("OK   {expression}"),
            Some(error) => {
                failed += 1;
                println!("FAIL {expression}");
                println!("     {error}");
            }
        }
    }

    if failed > 0 {
        println!();
        println!("{failed} of {} expressions invalid", args.expressions.len());
        exit(1);
    }
}
