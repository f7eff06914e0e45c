//! CLI for the etacalc download ETA estimator.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use etacalc_core::config;
use etacalc_core::Base;

use commands::{run_completions, run_estimate, run_form, run_man, run_units};

/// Top-level CLI for etacalc.
#[derive(Debug, Parser)]
#[command(name = "etacalc")]
#[command(about = "etacalc: estimate how long a download will take", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Quantities for a one-shot estimate. Units accept a full name (`gigabyte`),
/// an abbreviation (`GB`, `Mb/s`) or the listed display name.
#[derive(Debug, Clone, Args)]
pub struct EstimateArgs {
    /// Total size of the download.
    #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
    pub total: f64,
    /// Unit for --total (default from config, else gigabyte).
    #[arg(long, value_name = "UNIT")]
    pub total_unit: Option<String>,

    /// Amount downloaded so far (default 0).
    #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
    pub downloaded: Option<f64>,
    /// Unit for --downloaded (default from config, else megabyte).
    #[arg(long, value_name = "UNIT")]
    pub downloaded_unit: Option<String>,

    /// Transfer speed, per second.
    #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
    pub speed: f64,
    /// Unit for --speed (default from config, else kilobyte).
    #[arg(long, value_name = "UNIT")]
    pub speed_unit: Option<String>,

    /// Prefix base: 2 (1024 per step) or 10 (1000 per step).
    #[arg(long, value_name = "2|10")]
    pub base: Option<Base>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Estimate percent complete and time remaining.
    Estimate(EstimateArgs),

    /// List the units available for a base.
    Units {
        /// Prefix base: 2 or 10 (default from config).
        #[arg(long, value_name = "2|10")]
        base: Option<Base>,
        /// Print the table as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Interactive form: edit fields line by line and watch the estimate update.
    Form {
        /// Prefix base: 2 or 10 (default from config).
        #[arg(long, value_name = "2|10")]
        base: Option<Base>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Estimate(args) => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_estimate(&cfg, &args)?;
            }
            CliCommand::Units { base, json } => {
                let cfg = config::load_or_init()?;
                run_units(base.unwrap_or(cfg.base), json)?;
            }
            CliCommand::Form { base } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_form(&cfg, base)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
