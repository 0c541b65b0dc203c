//! Table, CSV and JSON output of a projection

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use super::{format_amount, format_term, OutputFormat, PeriodLabeler, ReportConfig};
use crate::error::Result;
use crate::projection::{downsample, ProjectionResult};
use crate::render::ChartContext;
use crate::schedule::step_date;

/// One displayed row, flattened for CSV
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub period: String,
    pub step: u64,
    pub date: Option<NaiveDate>,
    pub balance: f64,
    pub contributions: f64,
    pub interest: f64,
}

/// Downsample and label the timeline according to `config`
pub fn build_rows(
    result: &ProjectionResult,
    config: &ReportConfig,
    labeler: &dyn PeriodLabeler,
) -> Vec<ReportRow> {
    downsample(result, config.view_frequency)
        .into_iter()
        .filter(|row| config.include_origin || row.entry.step != 0)
        .map(|row| ReportRow {
            period: labeler.label(row.frequency, row.label),
            step: row.entry.step,
            date: config
                .start_date
                .map(|start| step_date(start, row.entry.step, result.step_per_year)),
            balance: row.entry.balance,
            contributions: row.entry.contributions,
            interest: row.entry.interest,
        })
        .collect()
}

pub fn write_csv<W: Write>(rows: &[ReportRow], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ProjectionResult,
    rows: &'a [ReportRow],
}

/// Full result plus the displayed rows
pub fn write_json<W: Write>(result: &ProjectionResult, rows: &[ReportRow], mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, &JsonReport { result, rows })?;
    writeln!(out)?;
    Ok(())
}

pub fn write_table<W: Write>(
    result: &ProjectionResult,
    rows: &[ReportRow],
    years: f64,
    mut out: W,
) -> Result<()> {
    let with_dates = rows.iter().any(|row| row.date.is_some());

    if with_dates {
        writeln!(out, "{:<14} {:<10} {:>18} {:>18} {:>18}", "Period", "Date", "Balance", "Contributions", "Interest")?;
    } else {
        writeln!(out, "{:<14} {:>18} {:>18} {:>18}", "Period", "Balance", "Contributions", "Interest")?;
    }

    for row in rows {
        let balance = format_amount(row.balance);
        let contributions = format_amount(row.contributions);
        let interest = format_amount(row.interest);
        match row.date {
            Some(date) => writeln!(
                out,
                "{:<14} {:<10} {:>18} {:>18} {:>18}",
                row.period, date, balance, contributions, interest
            )?,
            None => writeln!(
                out,
                "{:<14} {:>18} {:>18} {:>18}",
                row.period, balance, contributions, interest
            )?,
        }
    }

    writeln!(out)?;
    writeln!(out, "Summary ({}):", format_term(years))?;
    writeln!(out, "  Final balance:       {}", format_amount(result.final_balance))?;
    writeln!(out, "  Total contributions: {}", format_amount(result.total_contributions))?;
    writeln!(out, "  Total interest:      {}", format_amount(result.total_interest))?;
    Ok(())
}

/// Write `result` in the configured format
///
/// `rate` and `years` are the normalized inputs, used in legends and the
/// summary line.
pub fn write_report<W: Write>(
    result: &ProjectionResult,
    config: &ReportConfig,
    labeler: &dyn PeriodLabeler,
    rate: f64,
    years: f64,
    mut out: W,
) -> Result<()> {
    let rows = build_rows(result, config, labeler);
    match config.format {
        OutputFormat::Table => write_table(result, &rows, years, out),
        OutputFormat::Csv => write_csv(&rows, out),
        OutputFormat::Json => write_json(result, &rows, out),
        OutputFormat::Chart => {
            let mut chart = ChartContext::default();
            chart.render(&rows, rate);
            serde_json::to_writer_pretty(&mut out, &chart.data())?;
            writeln!(out)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ProjectionInput;
    use crate::projection::project;
    use crate::report::EnglishLabels;

    fn sample() -> ProjectionResult {
        project(&ProjectionInput {
            initial: 1000.0,
            contribution: 100.0,
            contribution_frequency: 12.0,
            rate: 5.0,
            years: 2.0,
            frequency: 12.0,
            ..Default::default()
        })
    }

    #[test]
    fn test_build_rows_skips_origin_by_default() {
        let result = sample();
        let rows = build_rows(&result, &ReportConfig::default(), &EnglishLabels);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].period, "Year 1");
        assert_eq!(rows[0].step, 12);
        assert_eq!(rows[1].balance, result.final_balance);
        assert!(rows.iter().all(|r| r.date.is_none()));
    }

    #[test]
    fn test_build_rows_with_origin_and_dates() {
        let config = ReportConfig {
            include_origin: true,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1),
            view_frequency: 12,
            ..Default::default()
        };
        let rows = build_rows(&sample(), &config, &EnglishLabels);
        assert_eq!(rows.len(), 25);
        assert_eq!(rows[0].period, "Month 0");
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2026, 1, 1));
        assert_eq!(rows[3].date, NaiveDate::from_ymd_opt(2026, 4, 1));
    }

    #[test]
    fn test_csv_output() {
        let rows = build_rows(&sample(), &ReportConfig::default(), &EnglishLabels);
        let mut buf = Vec::new();
        write_csv(&rows, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("period,step,date,balance,contributions,interest"));
        assert!(lines.next().unwrap().starts_with("Year 1,12,,"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_json_output_contains_summary_and_rows() {
        let result = sample();
        let rows = build_rows(&result, &ReportConfig::default(), &EnglishLabels);
        let mut buf = Vec::new();
        write_json(&result, &rows, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["stepPerYear"], 12);
        assert_eq!(value["timeline"].as_array().unwrap().len(), 25);
        assert_eq!(value["rows"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_table_output() {
        let result = sample();
        let rows = build_rows(&result, &ReportConfig::default(), &EnglishLabels);
        let mut buf = Vec::new();
        write_table(&result, &rows, 2.0, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Period"));
        assert!(text.contains("Year 2"));
        assert!(text.contains("Summary (2 years):"));
        assert!(text.contains(&format_amount(result.final_balance)));
    }

    #[test]
    fn test_chart_output() {
        let config = ReportConfig { format: OutputFormat::Chart, include_origin: true, ..Default::default() };
        let mut buf = Vec::new();
        write_report(&sample(), &config, &EnglishLabels, 5.0, 2.0, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["labels"].as_array().unwrap().len(), 3);
        assert_eq!(value["balanceLegend"], "Future balance (5.00%)");
    }
}
