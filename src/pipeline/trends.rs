// Pipeline A - monthly job vacancies per province (line chart)

use crate::chart::{LineChart, Series};
use crate::error::{PipelineError, Result};
use crate::loader::RawTable;
use crate::tables::VacancyTable;
use tracing::debug;

/// Months plotted on the x axis, in order
pub const TREND_MONTHS: [&str; 3] = ["August 2024", "September 2024", "October 2024"];

pub fn build(vacancy: RawTable) -> Result<LineChart> {
    let table = VacancyTable::from_raw(vacancy).map_err(|err| match err {
        PipelineError::EmptyFilter { stage, .. } => PipelineError::EmptyFilter {
            stage,
            message: "No rows found for 'Job vacancies 4'. Check your CSV content.".to_string(),
        },
        other => other,
    })?;

    if table.rows.is_empty() {
        return Err(PipelineError::empty_filter(
            "geography",
            "No provinces left after removing Canada. Check your CSV content.",
        ));
    }

    let months: Vec<(&str, usize)> = TREND_MONTHS
        .iter()
        .filter_map(|m| table.column(m).map(|idx| (*m, idx)))
        .collect();

    if months.is_empty() {
        return Err(PipelineError::NoMonthColumns);
    }

    let series: Vec<Series> = table
        .rows
        .iter()
        .map(|row| Series {
            name: row.geography.clone(),
            values: months.iter().map(|(_, idx)| row.values[*idx]).collect(),
        })
        .collect();

    debug!(series = series.len(), months = months.len(), "trend chart built");

    Ok(LineChart {
        title: "Job Vacancies by Province/Territory".to_string(),
        x_label: "Month".to_string(),
        y_label: "Number of Vacancies".to_string(),
        legend_title: "Province/Territory".to_string(),
        categories: months.iter().map(|(m, _)| m.to_string()).collect(),
        series,
    })
}
