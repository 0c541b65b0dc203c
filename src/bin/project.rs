//! Run a single projection and print it as a table, CSV, JSON or chart series
//!
//! The form can come from a JSON file (`--input`), from flags, or both; flags
//! win over file values.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde_json::Value;

use compound_projection::input::NormalizedInput;
use compound_projection::report::{write_report, EnglishLabels, OutputFormat, ReportConfig};
use compound_projection::schedule::{parse_date, Cadence};
use compound_projection::{CalcError, Calculator, FormSnapshot};

#[derive(Debug, Parser)]
#[command(name = "project", about = "Compound-interest projection with recurring contributions")]
struct Args {
    /// JSON file with a form snapshot
    #[arg(long)]
    input: Option<PathBuf>,

    /// JSON file with report settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting balance
    #[arg(long)]
    initial: Option<f64>,

    /// Amount deposited per contribution event
    #[arg(long)]
    contribution: Option<f64>,

    /// Contribution events per year
    #[arg(long)]
    contribution_frequency: Option<u32>,

    /// Yearly increase of the per-event contribution, in percent
    #[arg(long)]
    contribution_growth: Option<f64>,

    /// Deposit before (true) or after (false) interest in a shared sub-period
    #[arg(long)]
    contribute_at_start: Option<bool>,

    /// Nominal annual interest rate, in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Projection horizon in years
    #[arg(long)]
    years: Option<f64>,

    /// Compounding events per year
    #[arg(long)]
    frequency: Option<u32>,

    /// Rows per year in the output
    #[arg(long)]
    view_frequency: Option<u32>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// First calendar date of the projection (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<String>,

    /// Include the initial balance row
    #[arg(long)]
    include_origin: bool,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn load_form(args: &Args) -> Result<FormSnapshot> {
    let mut form = match &args.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing form snapshot {}", path.display()))?
        }
        None => FormSnapshot::default(),
    };

    let set = |slot: &mut Value, value: Option<Value>| {
        if let Some(v) = value {
            *slot = v;
        }
    };
    set(&mut form.initial, args.initial.map(Value::from));
    set(&mut form.contribution, args.contribution.map(Value::from));
    set(&mut form.contribution_frequency, args.contribution_frequency.map(Value::from));
    set(&mut form.contribution_growth, args.contribution_growth.map(Value::from));
    set(&mut form.rate, args.rate.map(Value::from));
    set(&mut form.years, args.years.map(Value::from));
    set(&mut form.frequency, args.frequency.map(Value::from));
    set(&mut form.view_frequency, args.view_frequency.map(Value::from));
    set(&mut form.contribute_at_start, args.contribute_at_start.map(Value::Bool));
    Ok(form)
}

fn load_config(args: &Args, form: &FormSnapshot) -> Result<ReportConfig> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::from_file(path)
            .with_context(|| format!("loading report config {}", path.display()))?,
        None => ReportConfig::default(),
    };

    if args.view_frequency.is_some() || args.config.is_none() {
        config.view_frequency = form.view_frequency();
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(raw) = &args.start_date {
        config.start_date = Some(parse_date(raw)?);
    }
    if args.include_origin {
        config.include_origin = true;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let form = load_form(&args)?;
    let config = load_config(&args, &form)?;

    let calculator = Calculator::new(form);
    calculator.calculate().map_err(CalcError::Validation)?;
    let result = calculator.result();

    let input = NormalizedInput::from(&calculator.form().to_input());
    info!(
        "Projected {} years: {} compounding, {} contributions, {} steps/year",
        input.years,
        Cadence::from_frequency(input.frequency).adjective(),
        Cadence::from_frequency(input.contribution_frequency).adjective(),
        result.step_per_year
    );

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    write_report(result, &config, &EnglishLabels, input.rate, input.years, &mut out)
        .context("writing report")?;
    out.flush().context("flushing output")?;

    if let Some(path) = &args.output {
        info!("Output written to {}", path.display());
    }
    Ok(())
}
