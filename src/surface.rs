// 🖼️ Chart surfaces
// Anything that can present a chart: the terminal viewer, a JSON export dir, tests

use crate::chart::Chart;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub trait ChartSurface {
    /// Present a chart; blocks until the viewer is done with it
    fn show(&mut self, chart: &Chart) -> Result<()>;
}

/// Writes every chart as pretty JSON into a directory
pub struct JsonExportSurface {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonExportSurface {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

        Ok(JsonExportSurface {
            dir,
            written: Vec::new(),
        })
    }

    /// Files written so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ChartSurface for JsonExportSurface {
    fn show(&mut self, chart: &Chart) -> Result<()> {
        let path = self.dir.join(format!("{}.json", slug(chart.title())));
        let json = serde_json::to_string_pretty(chart)?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write chart: {}", path.display()))?;

        info!(path = %path.display(), "chart exported");
        println!("Chart written to {}", path.display());

        self.written.push(path);
        Ok(())
    }
}

/// "Job Vacancies by Province/Territory" → "job-vacancies-by-province-territory"
pub fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            dash = false;
        } else if !dash && !out.is_empty() {
            out.push('-');
            dash = true;
        }
    }

    while out.ends_with('-') {
        out.pop();
    }

    if out.is_empty() {
        "chart".to_string()
    } else {
        out
    }
}
