//! palcase — palindrome test-case generator and checker.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use palcase::config;
use palcase::constants;
use palcase::driver;
use palcase::env;
use palcase::logging;
use palcase::models;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{CaseArgs, CheckArgs, Cli, Command, RunArgs};
use config::Config;
use driver::CaseDriver;
use env::Env;
use models::{CaseIndex, RunReport};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();
    logging::init(cli.verbose, &env);

    match cli.command {
        None => run_all(&cli, &RunArgs::default(), &env),
        Some(Command::Run(ref args)) => run_all(&cli, args, &env),
        Some(Command::Case(ref args)) => run_case(&cli, args, &env),
        Some(Command::Check(ref args)) => run_check(&cli, args, &env),
        Some(Command::Clean) => run_clean(&cli, &env),
        Some(Command::Config) => run_config(&cli, &env),
        Some(Command::Version) => run_version(),
    }
}

/// Load layered config and apply the global CLI flags.
fn load_config(cli: &Cli, env: &Env) -> Result<Config> {
    let mut config =
        Config::load(Some(Path::new(".")), env).context("failed to load configuration")?;
    cli.apply_overrides(&mut config);
    Ok(config)
}

/// Generate and check every case.
fn run_all(cli: &Cli, args: &RunArgs, env: &Env) -> Result<()> {
    let mut config = load_config(cli, env)?;
    args.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;

    let report = CaseDriver::from_config(&config.run)
        .run_all()
        .context("run aborted")?;

    print!("{}", args.format.render(&report));
    Ok(())
}

/// Generate and check a single case.
fn run_case(cli: &Cli, args: &CaseArgs, env: &Env) -> Result<()> {
    let mut config = load_config(cli, env)?;
    args.generation.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;

    let index = CaseIndex(args.index);
    let case = CaseDriver::from_config(&config.run)
        .run_case(index)
        .with_context(|| format!("case {index} failed"))?;

    let report = RunReport { cases: vec![case] };
    print!("{}", args.format.render(&report));
    Ok(())
}

/// Check an existing input file again.
fn run_check(cli: &Cli, args: &CheckArgs, env: &Env) -> Result<()> {
    let config = load_config(cli, env)?;

    let index = CaseIndex(args.index);
    let case = driver::recheck(&config.run.dir, index)
        .with_context(|| format!("check of case {index} failed"))?;

    let report = RunReport { cases: vec![case] };
    print!("{}", args.format.render(&report));
    Ok(())
}

/// Remove generated case files.
fn run_clean(cli: &Cli, env: &Env) -> Result<()> {
    let config = load_config(cli, env)?;
    let dir = &config.run.dir;

    let stats = driver::clean(dir)
        .with_context(|| format!("failed to clean {}", dir.display()))?;
    println!(
        "Removed {} case file(s) ({}) from {}.",
        stats.files,
        stats.human_size(),
        dir.display(),
    );
    Ok(())
}

/// Print the resolved configuration.
fn run_config(cli: &Cli, env: &Env) -> Result<()> {
    let config = load_config(cli, env)?;
    let rendered = toml::to_string(&config).context("failed to serialize configuration")?;
    print!("{rendered}");
    Ok(())
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}
