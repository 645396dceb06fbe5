//! Rendering of the final total.

use crate::accumulator::RunningTotal;
use crate::config::OutputFormat;
use anyhow::{Context, Result};
use serde::Serialize;

/// What a finished session or `total` run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub hours: u32,
    pub minutes: u32,
    pub days: usize,
}

impl Summary {
    pub fn new(total: RunningTotal, days: usize) -> Self {
        Self { hours: total.hours, minutes: total.minutes, days }
    }
}

pub fn render(summary: &Summary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "TOTAL TIME WORKED:\nHOURS: {}\nMINUTES: {}",
            summary.hours, summary.minutes
        )),
        OutputFormat::Json => {
            serde_json::to_string(summary).context("Failed to serialize summary")
        }
    }
}
