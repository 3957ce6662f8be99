// 🏭 Pipelines
// Each one turns freshly loaded tables into a renderable chart

pub mod education_vacancy;
pub mod income_education;
pub mod trends;

use crate::chart::Chart;
use crate::config::Config;
use crate::error::Result;
use crate::loader::{load_table, DatasetLayout};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    JobMarketTrends,
    EducationVsVacancies,
    IncomeVsEducation,
}

impl Pipeline {
    pub const ALL: [Pipeline; 3] = [
        Pipeline::JobMarketTrends,
        Pipeline::EducationVsVacancies,
        Pipeline::IncomeVsEducation,
    ];

    /// Menu label
    pub fn title(&self) -> &'static str {
        match self {
            Pipeline::JobMarketTrends => "Job Market Trends & Demand (Line Chart)",
            Pipeline::EducationVsVacancies => "Education vs. Employment Vacancies",
            Pipeline::IncomeVsEducation => "Income vs. Education (by Age Group)",
        }
    }

    /// Printed before the pipeline starts
    pub fn banner(&self) -> &'static str {
        match self {
            Pipeline::JobMarketTrends => "Generating Job Market Trends (Line Chart)...",
            Pipeline::EducationVsVacancies => "Generating Education vs. Employment Vacancies chart...",
            Pipeline::IncomeVsEducation => "Generating Income vs. Education chart...",
        }
    }

    /// Short name used in error reports
    pub fn name(&self) -> &'static str {
        match self {
            Pipeline::JobMarketTrends => "job_market_trends",
            Pipeline::EducationVsVacancies => "education_vs_vacancies",
            Pipeline::IncomeVsEducation => "income_vs_education",
        }
    }

    /// Load the files this pipeline needs and build its chart
    pub fn run(&self, config: &Config) -> Result<Chart> {
        info!(pipeline = self.name(), "running pipeline");

        let chart = match self {
            Pipeline::JobMarketTrends => {
                let vacancy = load_table(&config.vacancy_csv, DatasetLayout::VACANCY)?;
                Chart::Line(trends::build(vacancy)?)
            }
            Pipeline::EducationVsVacancies => {
                let vacancy = load_table(&config.vacancy_csv, DatasetLayout::VACANCY)?;
                let education = load_table(&config.education_csv, DatasetLayout::EDUCATION)?;
                Chart::Scatter(education_vacancy::build(vacancy, education)?)
            }
            Pipeline::IncomeVsEducation => {
                let income = load_table(&config.income_csv, DatasetLayout::INCOME)?;
                let education = load_table(&config.education_csv, DatasetLayout::EDUCATION)?;
                Chart::Scatter(income_education::build(income, education)?)
            }
        };

        info!(pipeline = self.name(), title = chart.title(), "chart ready");
        Ok(chart)
    }
}
