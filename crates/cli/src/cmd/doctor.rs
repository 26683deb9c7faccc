use datexpr_core::config::loader::default_config_path;
use datexpr_core::config::types::ResolvedConfig;
use datexpr_core::datemath::format_calendar_date;

pub fn run(cfg: &ResolvedConfig) {
    let engine = cfg.engine(None);

    println!("OK   dxp doctor");
    println!("version: {}", datexpr_core::version());
    match cfg.source {
        Some(ref path) => println!("path: {}", path.display()),
        None => println!("path: {} (not found, using defaults)", default_config_path().display()),
    }
    println!("limits.max_expression_length: {}", engine.limits().max_expression_length);
    println!("limits.max_interval_amount: {}", engine.limits().max_interval_amount);
    println!(
        "system.date: {}",
        cfg.pinned_date.map_or_else(|| "today (UTC)".to_string(), format_calendar_date)
    );
    println!("system.variables: {}", engine.system_variables().names().join(", "));
    println!("logging.level: {}", cfg.logging.level);
    if let Some(ref file) = cfg.logging.file {
        println!("logging.file: {}", file.display());
    }
}
