//! Repeat one projection across a range of interest rates
//!
//! Outputs one CSV row per rate with the final summaries.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use compound_projection::projection::{project_sweep, rate_range};
use compound_projection::ProjectionInput;

#[derive(Debug, Parser)]
#[command(name = "rate_sweep", about = "Final balances across a range of interest rates")]
struct Args {
    #[arg(long, default_value_t = 10_000.0)]
    initial: f64,

    #[arg(long, default_value_t = 0.0)]
    contribution: f64,

    #[arg(long, default_value_t = 12)]
    contribution_frequency: u32,

    /// Percent per year
    #[arg(long, default_value_t = 0.0)]
    contribution_growth: f64,

    #[arg(long)]
    contribute_at_end: bool,

    #[arg(long, default_value_t = 30.0)]
    years: f64,

    #[arg(long, default_value_t = 1)]
    frequency: u32,

    /// Lowest rate, in percent
    #[arg(long, default_value_t = 1.0)]
    from: f64,

    /// Highest rate, in percent
    #[arg(long, default_value_t = 10.0)]
    to: f64,

    #[arg(long, default_value_t = 0.5)]
    step: f64,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.to < args.from {
        bail!("--to ({}) must not be below --from ({})", args.to, args.from);
    }

    let base = ProjectionInput {
        initial: args.initial,
        contribution: args.contribution,
        contribution_frequency: args.contribution_frequency as f64,
        contribution_growth: args.contribution_growth,
        contribute_at_start: !args.contribute_at_end,
        rate: 0.0,
        years: args.years,
        frequency: args.frequency as f64,
    };
    let rates = rate_range(args.from, args.to, args.step);

    let start = Instant::now();
    let rows = project_sweep(&base, &rates);
    info!("Projected {} rates in {:?}", rows.len(), start.elapsed());

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).with_context(|| format!("creating {}", path.display()))?),
        None => Box::new(io::stdout().lock()),
    };

    let mut writer = csv::Writer::from_writer(out);
    for row in &rows {
        writer.serialize(row).context("writing sweep row")?;
    }
    writer.flush().context("flushing output")?;

    if let Some(path) = &args.output {
        info!("Output written to {}", path.display());
    }
    Ok(())
}
