// Pipeline B - tertiary education share vs. average job vacancies

use crate::chart::{ScatterChart, ScatterPoint};
use crate::error::{PipelineError, Result};
use crate::join::inner_join;
use crate::loader::RawTable;
use crate::tables::{EducationTable, VacancyTable};
use tracing::debug;

pub fn build(vacancy: RawTable, education: RawTable) -> Result<ScatterChart> {
    let vacancies = VacancyTable::from_raw(vacancy)?;
    let education = EducationTable::from_raw(education)?;

    let joined = inner_join(&vacancies.rows, &education.rows);
    if joined.is_empty() {
        return Err(PipelineError::empty_join(
            "No matched provinces after merging. Check name standardization or skip logic.",
        ));
    }

    let points: Vec<ScatterPoint> = joined
        .into_iter()
        .map(|(vac, edu)| ScatterPoint {
            label: vac.geography.clone(),
            x: edu.tertiary_pct,
            y: vac.average_vacancies(),
        })
        .collect();

    debug!(points = points.len(), "education vs vacancies built");

    Ok(ScatterChart {
        title: "Tertiary Education (%) vs. Average Job Vacancies".to_string(),
        x_label: "Tertiary Education (%) (2023)".to_string(),
        y_label: "Average Vacancies".to_string(),
        annotated: false,
        points,
    })
}
