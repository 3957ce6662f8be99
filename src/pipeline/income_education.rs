// Pipeline C - average income (25 to 34) vs. tertiary education share

use crate::chart::{ScatterChart, ScatterPoint};
use crate::error::{PipelineError, Result};
use crate::join::inner_join;
use crate::loader::RawTable;
use crate::tables::{EducationTable, IncomeTable};
use tracing::debug;

pub fn build(income: RawTable, education: RawTable) -> Result<ScatterChart> {
    let income = IncomeTable::from_raw(income)?;
    let education = EducationTable::from_raw(education)?;

    let joined = inner_join(&income.rows, &education.rows);
    if joined.is_empty() {
        return Err(PipelineError::empty_join(
            "No matched provinces between income & education. Check name standardization.",
        ));
    }

    let points: Vec<ScatterPoint> = joined
        .into_iter()
        .map(|(inc, edu)| ScatterPoint {
            label: inc.province.clone(),
            x: edu.tertiary_pct,
            y: inc.avg_income,
        })
        .collect();

    debug!(points = points.len(), "income vs education built");

    Ok(ScatterChart {
        title: "Avg Income (25–34) vs. Tertiary Education (%) For Each Province".to_string(),
        x_label: "Tertiary Education (%) (2023)".to_string(),
        y_label: "Avg Income (excluding zeros), 25–34 yrs".to_string(),
        annotated: true,
        points,
    })
}
