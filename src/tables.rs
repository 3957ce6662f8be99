// 📊 Cleaned tables
// RawTable → typed rows keyed by canonical geography

use crate::cleaning::{coerce_numeric, extract_percentage, forward_fill, mean};
use crate::error::{PipelineError, Result};
use crate::geography::{is_national, normalize};
use crate::loader::RawTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

// ============================================================================
// COLUMN LABELS & FILTER VALUES
// ============================================================================

pub const GEOGRAPHY: &str = "Geography";
pub const STATISTICS: &str = "Statistics";
pub const JOB_VACANCIES: &str = "Job vacancies 4";

pub const ATTAINMENT: &str = "Educational attainment level 7";
pub const TERTIARY: &str = "Tertiary education";
/// Reference year column holding the attainment percentage
pub const REFERENCE_YEAR: &str = "2023";

pub const INCOME_GEO: &str = "GEO";
pub const AGE_GROUP: &str = "Age group";
pub const VALUE: &str = "VALUE";
pub const INCOME_STATISTIC: &str = "Average income (excluding zeros)";
pub const AGE_BAND: &str = "25 to 34 years";

/// Columns before the first value column in the vacancy table
const VACANCY_KEY_COLUMNS: usize = 2;

// ============================================================================
// VACANCIES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyRow {
    pub geography: String,
    pub statistics: String,
    /// One entry per `VacancyTable::value_columns`
    pub values: Vec<Option<f64>>,
}

impl VacancyRow {
    /// Mean over every month, ignoring missing cells
    pub fn average_vacancies(&self) -> Option<f64> {
        mean(self.values.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyTable {
    /// Labels of every column after Geography and Statistics
    pub value_columns: Vec<String>,
    pub rows: Vec<VacancyRow>,
}

impl VacancyTable {
    /// Forward-fill, normalize, keep "Job vacancies 4", drop Canada, coerce values
    ///
    /// Fails with `EmptyFilter` when no row carries the vacancy statistic
    /// (checked before Canada is removed).
    pub fn from_raw(mut raw: RawTable) -> Result<Self> {
        let geo = raw.column(GEOGRAPHY)?;
        let stat = raw.column(STATISTICS)?;

        forward_fill(&mut raw, geo);
        raw.retain_eq(stat, JOB_VACANCIES);

        if raw.is_empty() {
            return Err(PipelineError::empty_filter(
                "statistics",
                "No rows found for 'Job vacancies 4'.",
            ));
        }

        let value_columns: Vec<String> = raw
            .headers
            .iter()
            .skip(VACANCY_KEY_COLUMNS)
            .cloned()
            .collect();

        let rows: Vec<VacancyRow> = raw
            .records
            .iter()
            .map(|record| VacancyRow {
                geography: normalize(record.get(geo)),
                statistics: record.get(stat).to_string(),
                values: record
                    .fields
                    .iter()
                    .skip(VACANCY_KEY_COLUMNS)
                    .map(|cell| coerce_numeric(cell))
                    .collect(),
            })
            .filter(|row| !is_national(&row.geography))
            .collect();

        debug!(rows = rows.len(), columns = value_columns.len(), "vacancy table built");

        Ok(VacancyTable {
            value_columns,
            rows,
        })
    }

    pub fn column(&self, label: &str) -> Option<usize> {
        self.value_columns.iter().position(|c| c == label)
    }
}

// ============================================================================
// EDUCATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRow {
    pub geography: String,
    pub attainment: String,
    pub tertiary_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationTable {
    pub rows: Vec<EducationRow>,
}

impl EducationTable {
    /// Tertiary-education share per province for the reference year
    pub fn from_raw(mut raw: RawTable) -> Result<Self> {
        let geo = raw.column(GEOGRAPHY)?;
        let level = raw.column(ATTAINMENT)?;
        let year = raw.column(REFERENCE_YEAR)?;

        forward_fill(&mut raw, geo);

        let rows: Vec<EducationRow> = raw
            .records
            .iter()
            .map(|record| (normalize(record.get(geo)), record))
            .filter(|(geography, _)| !is_national(geography))
            .filter(|(_, record)| record.get(level) == TERTIARY)
            .map(|(geography, record)| EducationRow {
                geography,
                attainment: record.get(level).to_string(),
                tertiary_pct: extract_percentage(record.get(year)),
            })
            .collect();

        debug!(rows = rows.len(), "education table built");

        Ok(EducationTable { rows })
    }
}

// ============================================================================
// INCOME
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRow {
    pub province: String,
    /// Mean of the matching VALUE cells, `None` if all were missing
    pub avg_income: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeTable {
    /// Sorted by province
    pub rows: Vec<IncomeRow>,
}

impl IncomeTable {
    /// Average income (excluding zeros) for ages 25 to 34, one row per province
    pub fn from_raw(mut raw: RawTable) -> Result<Self> {
        let geo = raw.column(INCOME_GEO)?;
        let stat = raw.column(STATISTICS)?;
        let age = raw.column(AGE_GROUP)?;
        let value = raw.column(VALUE)?;

        raw.retain_eq(stat, INCOME_STATISTIC);
        if raw.is_empty() {
            return Err(PipelineError::empty_filter(
                "statistics",
                "No rows found for 'Average income (excluding zeros)'.",
            ));
        }

        raw.retain_eq(age, AGE_BAND);
        if raw.is_empty() {
            return Err(PipelineError::empty_filter(
                "age group",
                "No rows found for '25 to 34 years'.",
            ));
        }

        let mut grouped: BTreeMap<String, Vec<Option<f64>>> = BTreeMap::new();
        for record in &raw.records {
            let province = normalize(record.get(geo));
            if is_national(&province) {
                continue;
            }
            grouped
                .entry(province)
                .or_default()
                .push(coerce_numeric(record.get(value)));
        }

        let rows: Vec<IncomeRow> = grouped
            .into_iter()
            .map(|(province, values)| IncomeRow {
                province,
                avg_income: mean(values),
            })
            .collect();

        debug!(rows = rows.len(), "income table built");

        Ok(IncomeTable { rows })
    }
}
