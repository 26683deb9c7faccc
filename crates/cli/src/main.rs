mod cmd;
mod logging;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use datexpr_core::config::loader::{ConfigLoader, default_config_path};
use datexpr_core::datemath::parse_calendar_date;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "dxp",
    version,
    about = "Substitute variables and date arithmetic in {{...}} expressions"
)]
struct Cli {
    /// Path to config.toml (default: ~/.config/datexpr/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Substitute every {{...}} expression in a file or stdin
    Render(RenderArgs),

    /// Evaluate a single expression
    Eval(EvalArgs),

    /// Check the syntax of expressions without evaluating them
    Validate(ValidateArgs),

    /// List the {{...}} expressions found in a file or stdin
    Extract(ExtractArgs),
}

/// Variable sources shared by commands that evaluate.
#[derive(Debug, Args)]
pub struct VarArgs {
    /// Set a variable (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Load variables from a YAML or TOML file
    #[arg(long = "vars", value_name = "FILE")]
    pub vars_file: Option<PathBuf>,

    /// Use this date for DATE instead of today
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Input file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub vars: VarArgs,

    /// Write the result to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the result and errors as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 if any expression fails
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Expression, with or without surrounding braces
    pub expression: String,

    #[command(flatten)]
    pub vars: VarArgs,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Expressions to check, with or without surrounding braces
    #[arg(required = true)]
    pub expressions: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// List referenced variable names instead of raw expressions
    #[arg(long)]
    pub vars_only: bool,
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    let (name, value) =
        s.split_once('=').ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(s).ok_or_else(|| format!("'{s}' is not a valid date (YYYY-MM-DD)"))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let cfg = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL dxp");
            println!("{e}");
            if cli.config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };

    logging::init(&cfg)?;

    match cli.command {
        Commands::Doctor => cmd::doctor::run(&cfg),
        Commands::Render(args) => cmd::render::run(&cfg, &args)?,
        Commands::Eval(args) => cmd::eval::run(&cfg, &args),
        Commands::Validate(args) => cmd::validate::run(&cfg, &args),
        Commands::Extract(args) => cmd::extract::run(&cfg, &args)?,
    }

    logging::flush();
    Ok(())
}
