//! Clap argument types and config overrides.

use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

use palcase::config::Config;
use palcase::models::RunReport;

/// Palindrome test-case generator with a brute-force checker.
#[derive(Parser, Debug)]
#[command(name = "palcase", version = palcase::constants::VERSION)]
pub struct Cli {
    /// Directory for the input/output case files (default: working directory).
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Log each generated numeral and verdict to stderr.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    /// Defaults to `run` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Generate and check every case.
    Run(RunArgs),

    /// Generate and check a single case.
    Case(CaseArgs),

    /// Check an existing input file again without regenerating it.
    Check(CheckArgs),

    /// Remove generated input/output files.
    Clean,

    /// Print the resolved configuration as TOML.
    Config,

    /// Print version and build information.
    Version,
}

/// Generation settings shared by `run` and `case`.
#[derive(Args, Debug, Default, Clone)]
pub struct GenerationArgs {
    /// Exclusive upper bound of the random base value (default: 20000).
    #[arg(long)]
    pub max_value: Option<u64>,

    /// Seed the random generator for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Number of cases to produce (default: 10).
    #[arg(long)]
    pub cases: Option<usize>,

    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Arguments for the `case` subcommand.
#[derive(Args, Debug)]
pub struct CaseArgs {
    /// Case index; even indices get a mirrored numeral.
    pub index: usize,

    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Case index whose input file should be checked.
    pub index: usize,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render a run report using the renderer for this format.
    pub fn render(&self, report: &RunReport) -> String {
        use palcase::output::OutputRenderer;
        match self {
            OutputFormat::Terminal => palcase::output::terminal::TerminalRenderer.render(report),
            OutputFormat::Json => palcase::output::json::JsonRenderer.render(report),
        }
    }
}

impl Cli {
    /// Apply the global `--dir` flag on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref dir) = self.dir {
            config.run.dir = dir.clone();
        }
    }
}

impl GenerationArgs {
    /// Apply `--max-value` / `--seed` on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(max_value) = self.max_value {
            config.run.max_value = max_value;
        }
        if let Some(seed) = self.seed {
            config.run.seed = Some(seed);
        }
    }
}

impl RunArgs {
    /// Apply `--cases` and the generation flags on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(cases) = self.cases {
            config.run.case_count = cases;
        }
        self.generation.apply_overrides(config);
    }
}
