//! Report configuration, row labelling and output writers

mod writer;

pub use writer::{build_rows, write_csv, write_json, write_report, write_table, ReportRow};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schedule::Cadence;

/// Output encoding of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table with a summary block
    Table,
    Csv,
    Json,
    /// Chart series for a plotting front end
    Chart,
}

/// Settings for how a projection is presented
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    /// Rows per year (1 = yearly, 12 = monthly)
    #[serde(default = "default_view_frequency")]
    pub view_frequency: u32,

    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// When set, each row also carries its calendar date
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Include the step 0 row (the initial balance)
    #[serde(default)]
    pub include_origin: bool,
}

fn default_view_frequency() -> u32 { 1 }
fn default_format() -> OutputFormat { OutputFormat::Table }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            view_frequency: 1,
            format: OutputFormat::Table,
            start_date: None,
            include_origin: false,
        }
    }
}

impl ReportConfig {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// Maps a displayed row to human-readable text
///
/// Translation lives with the caller; `EnglishLabels` is the built-in default.
pub trait PeriodLabeler {
    fn label(&self, frequency: u32, index: usize) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl PeriodLabeler for EnglishLabels {
    fn label(&self, frequency: u32, index: usize) -> String {
        format!("{} {}", Cadence::from_frequency(frequency).period_name(), index)
    }
}

/// Two decimals with comma thousands separators
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}

/// "1 year", "2.5 years"
pub fn format_term(years: f64) -> String {
    if !years.is_finite() {
        return String::new();
    }
    let unit = if years == 1.0 { "year" } else { "years" };
    format!("{years} {unit}")
}
