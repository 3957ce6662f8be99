// 📋 Interactive menu
// Blocking prompt loop; a failed pipeline never ends the session

use crate::config::Config;
use crate::error::FailureKind;
use crate::pipeline::Pipeline;
use crate::surface::ChartSurface;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Pipeline),
    All,
    Quit,
}

impl MenuChoice {
    /// "1".."4" or "q" (any case, surrounding whitespace ignored)
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(MenuChoice::Run(Pipeline::JobMarketTrends)),
            "2" => Some(MenuChoice::Run(Pipeline::EducationVsVacancies)),
            "3" => Some(MenuChoice::Run(Pipeline::IncomeVsEducation)),
            "4" => Some(MenuChoice::All),
            "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }

    /// Pipelines to run for this choice, in order
    pub fn pipelines(&self) -> Vec<Pipeline> {
        match self {
            MenuChoice::Run(pipeline) => vec![*pipeline],
            MenuChoice::All => Pipeline::ALL.to_vec(),
            MenuChoice::Quit => Vec::new(),
        }
    }
}

/// Outcome of one pipeline invocation from the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Shown,
    Failed(String),
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Select a graph to display (Excluding Canada):")?;
    for (i, pipeline) in Pipeline::ALL.iter().enumerate() {
        writeln!(out, "{}) {}", i + 1, pipeline.title())?;
    }
    writeln!(out, "4) Show ALL")?;
    writeln!(out, "Q) Quit")?;
    write!(out, "Enter choice: ")?;
    out.flush()?;
    Ok(())
}

/// Run one pipeline and hand its chart to the surface
///
/// Empty results print their diagnostic as-is, load and display failures
/// are prefixed with the pipeline name. Either way the outcome is
/// `RunOutcome::Failed`; only a broken `out` is an error.
pub fn run_pipeline<W: Write>(
    pipeline: Pipeline,
    config: &Config,
    surface: &mut dyn ChartSurface,
    out: &mut W,
) -> Result<RunOutcome> {
    writeln!(out, "{}", pipeline.banner())?;

    let chart = match pipeline.run(config) {
        Ok(chart) => chart,
        Err(err) => {
            warn!(pipeline = pipeline.name(), error = %err, "pipeline failed");
            match err.kind() {
                FailureKind::EmptyResult => writeln!(out, "{}", err)?,
                FailureKind::Load => writeln!(out, "[Error in {}]: {}", pipeline.name(), err)?,
            }
            return Ok(RunOutcome::Failed(err.to_string()));
        }
    };

    match surface.show(&chart) {
        Ok(()) => Ok(RunOutcome::Shown),
        Err(err) => {
            warn!(pipeline = pipeline.name(), error = %err, "chart display failed");
            writeln!(out, "[Error in {}]: {}", pipeline.name(), err)?;
            Ok(RunOutcome::Failed(err.to_string()))
        }
    }
}

/// Run every pipeline a choice names
pub fn run_choice<W: Write>(
    choice: MenuChoice,
    config: &Config,
    surface: &mut dyn ChartSurface,
    out: &mut W,
) -> Result<Vec<RunOutcome>> {
    let mut outcomes = Vec::new();
    for pipeline in choice.pipelines() {
        outcomes.push(run_pipeline(pipeline, config, surface, out)?);
    }
    Ok(outcomes)
}

/// Prompt until the user quits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    config: &Config,
    surface: &mut dyn ChartSurface,
) -> Result<()> {
    loop {
        print_menu(&mut out)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "Exiting the script. Goodbye!")?;
            return Ok(());
        }

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Quit) => {
                writeln!(out, "Exiting the script. Goodbye!")?;
                return Ok(());
            }
            Some(choice) => {
                run_choice(choice, config, surface, &mut out)?;
            }
            None => writeln!(out, "Invalid option. Please try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;
    use crate::loader::DatasetLayout;
    use crate::pipeline::fixtures::{padded, EDUCATION_BODY, INCOME_TEXT, VACANCY_BODY};
    use std::fs;
    use std::io::Cursor;

    /// Remembers chart titles instead of drawing them
    #[derive(Default)]
    struct RecordingSurface {
        titles: Vec<String>,
    }

    impl ChartSurface for RecordingSurface {
        fn show(&mut self, chart: &Chart) -> Result<()> {
            self.titles.push(chart.title().to_string());
            Ok(())
        }
    }

    fn fixture_config() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("data.csv"),
            padded(VACANCY_BODY, DatasetLayout::VACANCY),
        )
        .unwrap();
        fs::write(
            dir.path().join("education.csv"),
            padded(EDUCATION_BODY, DatasetLayout::EDUCATION),
        )
        .unwrap();
        fs::write(dir.path().join("income.csv"), INCOME_TEXT).unwrap();

        let config = Config::in_dir(dir.path());
        (dir, config)
    }

    fn session(input: &str, config: &Config) -> (String, RecordingSurface) {
        let mut surface = RecordingSurface::default();
        let mut out = Vec::new();
        run_menu(Cursor::new(input), &mut out, config, &mut surface).unwrap();
        (String::from_utf8(out).unwrap(), surface)
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(
            MenuChoice::parse("1\n"),
            Some(MenuChoice::Run(Pipeline::JobMarketTrends))
        );
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::All));
        assert_eq!(MenuChoice::parse("Q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("quit"), None);
    }

    #[test]
    fn test_show_all_runs_three_in_order() {
        let (_dir, config) = fixture_config();
        let (_, surface) = session("4\nq\n", &config);

        assert_eq!(
            surface.titles,
            vec![
                "Job Vacancies by Province/Territory",
                "Tertiary Education (%) vs. Average Job Vacancies",
                "Avg Income (25–34) vs. Tertiary Education (%) For Each Province",
            ]
        );
    }

    #[test]
    fn test_invalid_option_reprompts() {
        let (_dir, config) = fixture_config();
        let (out, surface) = session("x\n2\nQ\n", &config);

        assert!(out.contains("Invalid option. Please try again."));
        assert_eq!(surface.titles.len(), 1);
        assert!(out.ends_with("Exiting the script. Goodbye!\n"));
    }

    #[test]
    fn test_failure_does_not_end_session() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::in_dir(dir.path());
        let (out, surface) = session("1\n3\nq\n", &config);

        assert!(out.contains("[Error in job_market_trends]"));
        assert!(out.contains("[Error in income_vs_education]"));
        assert!(surface.titles.is_empty());
        assert_eq!(out.matches("Select a graph").count(), 3);
    }

    #[test]
    fn test_empty_result_prints_diagnostic_only() {
        let (_dir, config) = fixture_config();
        fs::write(
            &config.income_csv,
            "GEO,Age group,Statistics,VALUE\nOntario,65 years and over,Average income (excluding zeros),1\n",
        )
        .unwrap();

        let (out, surface) = session("3\nq\n", &config);

        assert!(out.contains("No rows found for '25 to 34 years'."));
        assert!(!out.contains("[Error in"));
        assert!(surface.titles.is_empty());
    }

    #[test]
    fn test_end_of_input_quits() {
        let (_dir, config) = fixture_config();
        let (out, _) = session("", &config);

        assert!(out.contains("Goodbye"));
    }

    #[test]
    fn test_run_choice_reports_outcomes() {
        let (_dir, config) = fixture_config();
        fs::write(&config.income_csv, "GEO,Age group,Statistics,VALUE\n").unwrap();

        let mut surface = RecordingSurface::default();
        let mut out = Vec::new();
        let outcomes = run_choice(MenuChoice::All, &config, &mut surface, &mut out).unwrap();

        assert_eq!(outcomes[0], RunOutcome::Shown);
        assert_eq!(outcomes[1], RunOutcome::Shown);
        assert!(matches!(&outcomes[2], RunOutcome::Failed(msg) if msg.contains("Average income")));
    }
}
