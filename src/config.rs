// ⚙️ Input file locations

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_VACANCY_CSV: &str = "data.csv";
pub const DEFAULT_EDUCATION_CSV: &str = "education.csv";
pub const DEFAULT_INCOME_CSV: &str = "income.csv";

/// Where each pipeline reads its tables from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub vacancy_csv: PathBuf,
    pub education_csv: PathBuf,
    pub income_csv: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vacancy_csv: PathBuf::from(DEFAULT_VACANCY_CSV),
            education_csv: PathBuf::from(DEFAULT_EDUCATION_CSV),
            income_csv: PathBuf::from(DEFAULT_INCOME_CSV),
        }
    }
}

impl Config {
    /// All three files inside `dir`, with the default names
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Config {
            vacancy_csv: dir.join(DEFAULT_VACANCY_CSV),
            education_csv: dir.join(DEFAULT_EDUCATION_CSV),
            income_csv: dir.join(DEFAULT_INCOME_CSV),
        }
    }
}
