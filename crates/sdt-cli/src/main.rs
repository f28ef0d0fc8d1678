//! `sdt-roc`: simulate a recognition-memory test and print its ROC as JSON.
//!
//! Plotting is left to whatever consumes the JSON.

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sdt_core::config::{CliOverrides, SdtConfig};
use sdt_core::tracing_setup;
use sdt_simulation::run_simulation;

use crate::report::RocReport;

#[derive(Parser, Debug)]
#[command(name = "sdt-roc", version, about = "Simulate SDT recognition memory and print ROC points")]
struct Args {
    /// Config file (defaults to ./sdt.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Items per population
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    population_size: Option<i64>,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long, overrides_with = "no_pretty")]
    pretty: bool,

    /// Compact JSON output, even when the config asks for pretty
    #[arg(long, overrides_with = "pretty")]
    no_pretty: bool,

    /// Include the Gaussian model's predicted ROC
    #[arg(long)]
    theoretical: bool,
}

impl Args {
    /// CLI layer of the config resolution; unset flags leave lower layers alone.
    fn overrides(&self) -> CliOverrides {
        let pretty = match (self.pretty, self.no_pretty) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        CliOverrides {
            population_size: self.population_size,
            seed: self.seed,
            pretty,
        }
    }
}

fn main() -> Result<()> {
    tracing_setup::init_tracing();
    let args = Args::parse();

    let cli = args.overrides();
    let root = std::env::current_dir().context("cannot resolve working directory")?;
    let config = SdtConfig::load(&root, args.config.as_deref(), Some(&cli))
        .context("failed to load configuration")?;
    let simulation = config
        .simulation_config()
        .context("invalid simulation configuration")?;

    let run = run_simulation(&simulation).context("simulation failed")?;
    let report = RocReport::build(
        &simulation,
        &run,
        config.output.effective_include_counts(),
        args.theoretical,
    )?;

    let json = if config.output.effective_pretty() {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_is_unset_without_flags() {
        let args = Args::try_parse_from(["sdt-roc"]).unwrap();
        assert_eq!(args.overrides().pretty, None);
    }

    #[test]
    fn no_pretty_sets_an_explicit_false() {
        let args = Args::try_parse_from(["sdt-roc", "--no-pretty"]).unwrap();
        assert_eq!(args.overrides().pretty, Some(false));
    }

    #[test]
    fn last_pretty_flag_wins() {
        let args = Args::try_parse_from(["sdt-roc", "--no-pretty", "--pretty"]).unwrap();
        assert_eq!(args.overrides().pretty, Some(true));
        let args = Args::try_parse_from(["sdt-roc", "--pretty", "--no-pretty"]).unwrap();
        assert_eq!(args.overrides().pretty, Some(false));
    }

    #[test]
    fn negative_population_size_parses() {
        let args = Args::try_parse_from(["sdt-roc", "-n", "-5", "--seed", "9"]).unwrap();
        let cli = args.overrides();
        assert_eq!(cli.population_size, Some(-5));
        assert_eq!(cli.seed, Some(9));
    }
}
