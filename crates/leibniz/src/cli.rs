use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;

use leibniz_core::{run as run_series, verify, SeriesConfig, Strategy, DEFAULT_ITERATIONS};

#[derive(Parser, Debug)]
#[command(
    name = "leibniz",
    version,
    about = "Approximate π with the Leibniz series and report the elapsed time"
)]
pub struct LeibnizCli {
    #[arg(long, value_name = "N", default_value_t = DEFAULT_ITERATIONS)]
    /// Number of k values to sum. The unrolled kernel ignores any N mod 4 tail.
    iterations: u64,

    #[arg(long, value_enum, default_value_t = StrategyArg::Unrolled)]
    /// Accumulation kernel to time.
    strategy: StrategyArg,

    #[arg(long)]
    /// Recompute with the in-order reference kernel and fail unless the bits match.
    verify: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Four k values per loop pass.
    Unrolled,
    /// One k value per loop pass.
    Sequential,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Unrolled => Strategy::Unrolled,
            StrategyArg::Sequential => Strategy::Sequential,
        }
    }
}

impl LeibnizCli {
    pub fn config(&self) -> SeriesConfig {
        SeriesConfig {
            iterations: self.iterations,
            strategy: self.strategy.into(),
        }
    }

    pub fn verify(&self) -> bool {
        self.verify
    }
}

/// Logs go to stderr so stdout carries only the report.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = LeibnizCli::parse();
    let stdout = io::stdout();
    execute(&cli, &mut stdout.lock())
}

/// Run the configured series and write the report to `out`.
pub fn execute(cli: &LeibnizCli, out: &mut impl Write) -> Result<()> {
    let config = cli.config();
    log::debug!("resolved configuration: {config:?}");

    let report = run_series(&config).context("invalid configuration")?;
    writeln!(out, "{report}").context("failed to write report")?;
    out.flush().context("failed to flush report")?;

    if cli.verify() {
        verify(&report).context("verification failed")?;
    }
    Ok(())
}
