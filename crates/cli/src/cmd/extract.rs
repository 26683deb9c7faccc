use color_eyre::eyre::Result;
use datexpr_core::config::types::ResolvedConfig;

use super::read_input;
use crate::ExtractArgs;

pub fn run(cfg: &ResolvedConfig, args: &ExtractArgs) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let engine = cfg.engine(None);

    let lines = if args.vars_only {
        engine.referenced_variables(&input)
    } else {
        engine.extract_expressions(&input)
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}
