// 🧹 Cleaning primitives shared by every pipeline

use crate::loader::RawTable;
use once_cell::sync::Lazy;
use regex::Regex;

/// Everything that can't be part of a plain decimal number
static NON_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.]").unwrap());

/// Fill empty cells of `column` with the nearest non-empty value above
///
/// StatCan tables label only the first row of each group, leaving the
/// remaining rows of the block blank. Leading blanks stay blank.
pub fn forward_fill(table: &mut RawTable, column: usize) {
    let mut last: Option<String> = None;

    for record in table.records.iter_mut() {
        let Some(cell) = record.fields.get_mut(column) else {
            continue;
        };

        if cell.trim().is_empty() {
            if let Some(value) = &last {
                *cell = value.clone();
            }
        } else {
            last = Some(cell.clone());
        }
    }
}

/// Parse a numeric cell, `None` when it isn't a number
///
/// Thousands separators are removed first, so "12,345" == "12345".
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    let value: f64 = cleaned.trim().parse().ok()?;

    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

/// Parse a percentage cell after stripping footnote symbols and units
///
/// Only digits and '.' survive, so "-3.5" reads as 3.5 and "1.2.3" is missing.
pub fn extract_percentage(raw: &str) -> Option<f64> {
    let digits = NON_DECIMAL.replace_all(raw, "");
    coerce_numeric(&digits)
}

/// Mean of the present values, `None` if there are none
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
