use std::collections::HashMap;

use tracing::warn;

use crate::error::{AnalysisError, Result};
use crate::records::{Dataset, FieldWarning, Publication};

pub const REQUIRED_COLUMNS: [&str; 13] = [
    "Authors",
    "Author full names",
    "Author(s) ID",
    "Title",
    "Year",
    "Source title",
    "Volume",
    "Issue",
    "Page start",
    "Page end",
    "Cited by",
    "Affiliations",
    "Author Keywords",
];

const COL_AUTHORS: usize = 0;
const COL_AUTHOR_FULL_NAMES: usize = 1;
const COL_AUTHOR_IDS: usize = 2;
const COL_TITLE: usize = 3;
const COL_YEAR: usize = 4;
const COL_SOURCE_TITLE: usize = 5;
const COL_VOLUME: usize = 6;
const COL_ISSUE: usize = 7;
const COL_PAGE_START: usize = 8;
const COL_PAGE_END: usize = 9;
const COL_CITED_BY: usize = 10;
const COL_AFFILIATIONS: usize = 11;
const COL_AUTHOR_KEYWORDS: usize = 12;

#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn load(table: RawTable) -> Result<Dataset> {
    let columns = resolve_columns(&table.headers)?;

    let mut records = Vec::with_capacity(table.rows.len());
    let mut warnings = Vec::new();

    for (idx, row) in table.rows.iter().enumerate() {
        let row_no = idx + 1;
        // Text is kept verbatim; only empty cells are absent.
        let cell = |col: usize| -> Option<String> {
            row.get(columns[col]).filter(|v| !v.is_empty()).cloned()
        };
        let numeric_cell = |col: usize| -> Option<String> {
            cell(col)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let year = match numeric_cell(COL_YEAR) {
            Some(raw) => match parse_year(&raw) {
                Some(y) => Some(y),
                None => {
                    warnings.push(FieldWarning {
                        row: row_no,
                        column: REQUIRED_COLUMNS[COL_YEAR],
                        value: raw,
                    });
                    None
                }
            },
            None => None,
        };

        let cited_by = match numeric_cell(COL_CITED_BY) {
            Some(raw) => match parse_cited_by(&raw) {
                Some(v) => Some(v),
                None => {
                    warnings.push(FieldWarning {
                        row: row_no,
                        column: REQUIRED_COLUMNS[COL_CITED_BY],
                        value: raw,
                    });
                    None
                }
            },
            None => None,
        };

        records.push(Publication {
            authors: cell(COL_AUTHORS),
            author_full_names: cell(COL_AUTHOR_FULL_NAMES),
            author_ids: cell(COL_AUTHOR_IDS),
            title: cell(COL_TITLE),
            year,
            source_title: cell(COL_SOURCE_TITLE),
            volume: cell(COL_VOLUME),
            issue: cell(COL_ISSUE),
            page_start: cell(COL_PAGE_START),
            page_end: cell(COL_PAGE_END),
            cited_by,
            affiliations: cell(COL_AFFILIATIONS),
            author_keywords: cell(COL_AUTHOR_KEYWORDS),
        });
    }

    for w in &warnings {
        warn!(row = w.row, column = w.column, value = %w.value, "malformed_field");
    }

    Ok(Dataset::new(records, warnings))
}

// Header position of each required column; first occurrence wins for duplicates.
fn resolve_columns(headers: &[String]) -> Result<[usize; 13]> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (i, name) in headers.iter().enumerate() {
        index.entry(name.as_str()).or_insert(i);
    }

    let mut columns = [0usize; 13];
    let mut missing = Vec::new();
    for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
        match index.get(name) {
            Some(&i) => columns[slot] = i,
            None => missing.push(name.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(AnalysisError::Schema { missing });
    }
    Ok(columns)
}

fn parse_year(raw: &str) -> Option<i32> {
    if let Ok(y) = raw.parse::<i32>() {
        return Some(y);
    }
    let f = raw.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(f as i32)
    } else {
        None
    }
}

fn parse_cited_by(raw: &str) -> Option<f64> {
    let v = raw.parse::<f64>().ok()?;
    if v.is_finite() && v >= 0.0 { Some(v) } else { None }
}
