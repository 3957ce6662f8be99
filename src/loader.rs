// 📂 Dataset Loader
// Delimited tables with metadata rows above the header and footnotes below the data

use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

// ============================================================================
// LAYOUTS
// ============================================================================

/// How many raw lines to discard before the header and after the last data row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetLayout {
    pub skip_head: usize,
    pub skip_tail: usize,
}

impl DatasetLayout {
    /// Job vacancy table (14-10-0325 style download)
    pub const VACANCY: DatasetLayout = DatasetLayout {
        skip_head: 8,
        skip_tail: 25,
    };

    /// Educational attainment table
    pub const EDUCATION: DatasetLayout = DatasetLayout {
        skip_head: 10,
        skip_tail: 24,
    };

    /// Income table is a plain full-table download
    pub const INCOME: DatasetLayout = DatasetLayout {
        skip_head: 0,
        skip_tail: 0,
    };
}

// ============================================================================
// RAW TABLE
// ============================================================================

/// One data row exactly as read, before cleaning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// 1-based line in the source file
    pub line_number: usize,
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn get(&self, index: usize) -> &str {
        self.fields.get(index).map(|s| s.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    /// Label used in error messages (usually the file path)
    pub source: String,
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
    /// Rows skipped because they had more fields than the header
    pub dropped_rows: usize,
}

impl RawTable {
    /// Index of a column by exact header label
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| PipelineError::MissingColumn {
                dataset: self.source.clone(),
                column: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep only records whose `column` equals `value` exactly
    pub fn retain_eq(&mut self, column: usize, value: &str) {
        self.records.retain(|r| r.get(column) == value);
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Read a table from disk
pub fn load_table(path: &Path, layout: DatasetLayout) -> Result<RawTable> {
    let bytes = fs::read(path).map_err(|source| PipelineError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8_lossy(&bytes);
    let table = parse_table(&text, layout, &path.display().to_string())?;

    debug!(
        source = %table.source,
        rows = table.records.len(),
        dropped = table.dropped_rows,
        "loaded table"
    );

    Ok(table)
}

/// Parse an in-memory table
///
/// The first line left after skipping becomes the header. Rows longer than
/// the header are dropped, shorter rows are padded with empty cells.
pub fn parse_table(text: &str, layout: DatasetLayout, source: &str) -> Result<RawTable> {
    let text = text.trim_start_matches('\u{feff}');
    let lines: Vec<&str> = text.lines().collect();

    let end = lines.len().saturating_sub(layout.skip_tail);
    let kept: &[&str] = if layout.skip_head < end {
        &lines[layout.skip_head..end]
    } else {
        &[]
    };
    let body = kept.join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut records = Vec::new();
    let mut dropped_rows = 0;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                if headers.is_none() {
                    return Err(PipelineError::Csv {
                        dataset: source.to_string(),
                        source: err,
                    });
                }
                debug!(source, error = %err, "skipping unreadable row");
                dropped_rows += 1;
                continue;
            }
        };

        let line_number = record
            .position()
            .map(|p| p.line() as usize + layout.skip_head)
            .unwrap_or(0);

        let header_len = match &headers {
            Some(header) => header.len(),
            None => {
                headers = Some(record.iter().map(|s| s.to_string()).collect());
                continue;
            }
        };

        if record.len() > header_len {
            debug!(source, line = line_number, "skipping row with too many fields");
            dropped_rows += 1;
            continue;
        }

        let mut fields: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        fields.resize(header_len, String::new());

        records.push(RawRecord {
            line_number,
            fields,
        });
    }

    Ok(RawTable {
        source: source.to_string(),
        headers: headers.unwrap_or_default(),
        records,
        dropped_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Table title
Frequency: Monthly
Geography,Statistics,August 2024
Canada,Job vacancies 4,\"500,000\"
Ontario,Job vacancies 4,\"200,100\",extra
,Job vacancy rate 5,3.1
Footnotes:
1 Something
";

    #[test]
    fn test_skips_head_and_tail() {
        let layout = DatasetLayout {
            skip_head: 2,
            skip_tail: 2,
        };
        let table = parse_table(SAMPLE, layout, "sample").unwrap();

        assert_eq!(table.headers, vec!["Geography", "Statistics", "August 2024"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].get(2), "500,000");
        assert_eq!(table.records[0].line_number, 4);
        assert_eq!(table.records[1].get(0), "");
    }

    #[test]
    fn test_long_rows_dropped_silently() {
        let layout = DatasetLayout {
            skip_head: 2,
            skip_tail: 2,
        };
        let table = parse_table(SAMPLE, layout, "sample").unwrap();

        assert_eq!(table.dropped_rows, 1);
        assert!(table.records.iter().all(|r| r.get(0) != "Ontario"));
    }

    #[test]
    fn test_short_rows_padded() {
        let text = "a,b,c\n1,2\n";
        let table = parse_table(text, DatasetLayout::INCOME, "short").unwrap();

        assert_eq!(table.records[0].fields, vec!["1", "2", ""]);
    }

    #[test]
    fn test_bom_and_blank_lines() {
        let text = "\u{feff}GEO,VALUE\n\nOntario,1\n";
        let table = parse_table(text, DatasetLayout::INCOME, "bom").unwrap();

        assert_eq!(table.column("GEO").unwrap(), 0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_skip_larger_than_file_gives_empty_table() {
        let table = parse_table("a,b\n1,2\n", DatasetLayout::VACANCY, "tiny").unwrap();

        assert!(table.headers.is_empty());
        assert!(table.is_empty());
        assert!(table.column("Geography").is_err());
    }

    #[test]
    fn test_missing_column_is_load_failure() {
        let table = parse_table("GEO,VALUE\n", DatasetLayout::INCOME, "income.csv").unwrap();
        let err = table.column("Statistics").unwrap_err();

        assert_eq!(err.kind(), crate::error::FailureKind::Load);
        assert!(err.to_string().contains("Statistics"));
    }

    #[test]
    fn test_load_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "GEO,VALUE\nOntario,1\nQuebec,2\n").unwrap();

        let table = load_table(file.path(), DatasetLayout::INCOME).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_table(Path::new("/definitely/not/here.csv"), DatasetLayout::INCOME)
            .unwrap_err();

        assert!(matches!(err, PipelineError::Load { .. }));
    }
}
