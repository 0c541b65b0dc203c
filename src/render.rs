//! Chart state owned by the caller
//!
//! A front end keeps one `ChartContext` per drawing surface and feeds it
//! every recomputed view. The outcome tells it whether to create, update or
//! tear down the drawing.

use serde::{Deserialize, Serialize};

use crate::report::ReportRow;

/// Series for a two-line balance/contributions chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub balances: Vec<f64>,
    pub contributions: Vec<f64>,
    pub balance_legend: String,
    pub contributions_legend: String,
}

impl ChartData {
    pub fn from_rows(rows: &[ReportRow], rate: f64) -> Self {
        Self {
            labels: rows.iter().map(|row| row.period.clone()).collect(),
            balances: rows.iter().map(|row| row.balance).collect(),
            contributions: rows.iter().map(|row| row.contributions).collect(),
            balance_legend: format!("Future balance ({:.2}%)", rate),
            contributions_legend: "Total contributions".to_string(),
        }
    }
}

/// What a render pass did to the drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Created,
    Updated,
    Destroyed,
    /// Nothing to draw and nothing drawn
    Skipped,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartContext {
    chart: Option<ChartData>,
}

impl ChartContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the chart contents with `rows`
    pub fn render(&mut self, rows: &[ReportRow], rate: f64) -> RenderOutcome {
        if rows.is_empty() {
            return match self.chart.take() {
                Some(_) => RenderOutcome::Destroyed,
                None => RenderOutcome::Skipped,
            };
        }

        let data = ChartData::from_rows(rows, rate);
        match self.chart.replace(data) {
            Some(_) => RenderOutcome::Updated,
            None => RenderOutcome::Created,
        }
    }

    pub fn data(&self) -> Option<&ChartData> {
        self.chart.as_ref()
    }
}
