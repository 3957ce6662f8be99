use anyhow::{bail, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;

use province_stats::config::{DEFAULT_EDUCATION_CSV, DEFAULT_INCOME_CSV, DEFAULT_VACANCY_CSV};
use province_stats::logging::init_logging;
use province_stats::{run_choice, run_menu, ChartSurface, Config, JsonExportSurface, MenuChoice};

#[derive(Parser)]
#[command(name = "province-stats")]
#[command(about = "Job vacancy, education and income charts for Canadian provinces")]
#[command(version)]
struct Cli {
    /// Job vacancy table
    #[arg(long, env = "PROVINCE_STATS_VACANCY_CSV", default_value = DEFAULT_VACANCY_CSV)]
    vacancy: PathBuf,

    /// Educational attainment table
    #[arg(long, env = "PROVINCE_STATS_EDUCATION_CSV", default_value = DEFAULT_EDUCATION_CSV)]
    education: PathBuf,

    /// Income table
    #[arg(long, env = "PROVINCE_STATS_INCOME_CSV", default_value = DEFAULT_INCOME_CSV)]
    income: PathBuf,

    /// Run one menu choice (1-4) and exit instead of prompting
    #[arg(long)]
    choice: Option<String>,

    /// Write charts as JSON into this directory instead of drawing them
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = Config {
        vacancy_csv: cli.vacancy.clone(),
        education_csv: cli.education.clone(),
        income_csv: cli.income.clone(),
    };
    info!(?config, "starting");

    let mut surface = make_surface(&cli)?;

    match &cli.choice {
        Some(raw) => {
            let Some(choice) = MenuChoice::parse(raw) else {
                bail!("Invalid choice '{}': expected 1, 2, 3, 4 or q", raw);
            };
            run_choice(choice, &config, surface.as_mut(), &mut io::stdout())?;
        }
        None => {
            let stdin = io::stdin();
            run_menu(stdin.lock(), io::stdout(), &config, surface.as_mut())?;
        }
    }

    Ok(())
}

fn make_surface(cli: &Cli) -> Result<Box<dyn ChartSurface>> {
    match &cli.export_dir {
        Some(dir) => Ok(Box::new(JsonExportSurface::new(dir)?)),
        None => terminal_surface(),
    }
}

#[cfg(feature = "tui")]
fn terminal_surface() -> Result<Box<dyn ChartSurface>> {
    Ok(Box::new(province_stats::ui::TerminalSurface::new()))
}

#[cfg(not(feature = "tui"))]
fn terminal_surface() -> Result<Box<dyn ChartSurface>> {
    bail!("TUI mode not available! Rebuild with --features tui, or pass --export-dir <DIR>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    const VACANCY_ENV: &str = "PROVINCE_STATS_VACANCY_CSV";

    // One test so the env var is never touched concurrently
    #[test]
    fn test_flag_beats_env_beats_default() {
        env::remove_var(VACANCY_ENV);
        let cli = Cli::try_parse_from(["province-stats"]).unwrap();
        assert_eq!(cli.vacancy, PathBuf::from(DEFAULT_VACANCY_CSV));

        env::set_var(VACANCY_ENV, "from-env.csv");
        let cli = Cli::try_parse_from(["province-stats"]).unwrap();
        assert_eq!(cli.vacancy, PathBuf::from("from-env.csv"));

        let cli = Cli::try_parse_from(["province-stats", "--vacancy", "from-flag.csv"]).unwrap();
        assert_eq!(cli.vacancy, PathBuf::from("from-flag.csv"));
        env::remove_var(VACANCY_ENV);
    }

    #[test]
    fn test_choice_and_export_dir_are_optional() {
        let cli = Cli::try_parse_from(["province-stats", "--choice", "4", "--export-dir", "out"])
            .unwrap();
        assert_eq!(cli.choice.as_deref(), Some("4"));
        assert_eq!(cli.export_dir, Some(PathBuf::from("out")));

        let cli = Cli::try_parse_from(["province-stats"]).unwrap();
        assert!(cli.choice.is_none());
        assert!(cli.export_dir.is_none());
    }
}
