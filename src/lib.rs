// Province Stats - Core Library
// Cleans StatCan vacancy, education and income tables and turns them into charts

pub mod chart;
pub mod cleaning;
pub mod config;
pub mod error;
pub mod geography;
pub mod join;
pub mod loader;
pub mod logging;
pub mod menu;
pub mod pipeline;
pub mod surface;
pub mod tables;

// Terminal chart viewer
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use chart::{Chart, LineChart, ScatterChart, ScatterPoint, Series};
pub use cleaning::{coerce_numeric, extract_percentage, forward_fill, mean};
pub use config::Config;
pub use error::{FailureKind, PipelineError};
pub use geography::{normalize, NATIONAL};
pub use join::{inner_join, JoinedView, Keyed};
pub use loader::{load_table, parse_table, DatasetLayout, RawRecord, RawTable};
pub use menu::{run_choice, run_menu, MenuChoice, RunOutcome};
pub use pipeline::Pipeline;
pub use surface::{ChartSurface, JsonExportSurface};
pub use tables::{
    EducationRow, EducationTable, IncomeRow, IncomeTable, VacancyRow, VacancyTable,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
