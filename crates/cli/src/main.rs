//! Twinbank CLI - runs the savings/current account demonstration
//!
//! Usage:
//! ```bash
//! twinbank          # reports only
//! twinbank -vv      # plus debug logs on stderr
//! ```

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::Level;
use twinbank_core::Account;

mod scenario;

/// Twinbank - savings and current accounts with a fixed transfer
#[derive(Parser)]
#[command(name = "twinbank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the reports
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = scenario::run(&mut out)?;
    out.flush()?;

    tracing::info!(
        savings = %outcome.savings.balance(),
        current = %outcome.current.balance(),
        "Scenario finished"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let cli = Cli::parse_from(["twinbank"]);
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(Cli::parse_from(["twinbank", "-v"]).log_level(), Level::INFO);
        assert_eq!(Cli::parse_from(["twinbank", "-vv"]).log_level(), Level::DEBUG);
        assert_eq!(Cli::parse_from(["twinbank", "-vvvv"]).log_level(), Level::TRACE);
        assert_eq!(Cli::parse_from(["twinbank", "-q"]).log_level(), Level::ERROR);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["twinbank", "-q", "-v"]).is_err());
    }
}
