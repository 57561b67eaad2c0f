mod loader;

use std::collections::{BTreeSet, HashSet};

use crate::error::{AnalysisError, Result};
use crate::fields;

pub use loader::{REQUIRED_COLUMNS, RawTable, load};

#[derive(Debug, Clone, PartialEq)]
pub struct Publication {
    pub authors: Option<String>,
    pub author_full_names: Option<String>,
    pub author_ids: Option<String>,
    pub title: Option<String>,
    pub year: Option<i32>,
    pub source_title: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub page_start: Option<String>,
    pub page_end: Option<String>,
    pub cited_by: Option<f64>,
    pub affiliations: Option<String>,
    pub author_keywords: Option<String>,
}

impl Publication {
    pub fn author_tokens(&self) -> Vec<String> {
        fields::split_authors(self.authors.as_deref())
    }

    pub fn keyword_tokens(&self) -> Vec<String> {
        fields::split_keywords(self.author_keywords.as_deref())
    }

    pub fn author_id_tokens(&self) -> Vec<String> {
        fields::split_author_ids(self.author_ids.as_deref())
    }

    pub fn cited_by_or_zero(&self) -> f64 {
        self.cited_by.unwrap_or(0.0)
    }
}

/// A row-level value that could not be coerced and was normalized away.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWarning {
    pub row: usize,
    pub column: &'static str,
    pub value: String,
}

impl std::fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "row {}: non-numeric {} value '{}' ignored",
            self.row, self.column, self.value
        )
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Publication>,
    years: Vec<i32>,
    warnings: Vec<FieldWarning>,
}

impl Dataset {
    pub(crate) fn new(records: Vec<Publication>, warnings: Vec<FieldWarning>) -> Self {
        let years: BTreeSet<i32> = records.iter().filter_map(|r| r.year).collect();
        Self {
            records,
            years: years.into_iter().collect(),
            warnings,
        }
    }

    pub fn records(&self) -> &[Publication] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct years; rows with an unusable `Year` do not contribute.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn warnings(&self) -> &[FieldWarning] {
        &self.warnings
    }

    pub fn filter_from_year(&self, start_year: i32) -> Result<FilteredView> {
        FilteredView::from_records(&self.records, start_year)
    }

    /// Distinct Scopus author identifiers across all rows.
    pub fn unique_author_ids(&self) -> usize {
        let mut seen = HashSet::new();
        for record in &self.records {
            seen.extend(record.author_id_tokens());
        }
        seen.len()
    }

    /// Filters from the earliest distinct year, keeping every dated record.
    pub fn filter_from_earliest(&self) -> Result<FilteredView> {
        match self.years.first() {
            Some(&y) => self.filter_from_year(y),
            None => Err(AnalysisError::EmptyResult { start_year: None }),
        }
    }
}

/// Records with `year >= start_year`, never empty.
#[derive(Debug, Clone)]
pub struct FilteredView {
    start_year: i32,
    records: Vec<Publication>,
}

impl FilteredView {
    fn from_records(records: &[Publication], start_year: i32) -> Result<Self> {
        let kept: Vec<Publication> = records
            .iter()
            .filter(|r| r.year.is_some_and(|y| y >= start_year))
            .cloned()
            .collect();
        if kept.is_empty() {
            return Err(AnalysisError::EmptyResult {
                start_year: Some(start_year),
            });
        }
        Ok(Self {
            start_year,
            records: kept,
        })
    }

    pub fn filter_from_year(&self, start_year: i32) -> Result<FilteredView> {
        let mut view = Self::from_records(&self.records, start_year)?;
        view.start_year = view.start_year.max(self.start_year);
        Ok(view)
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn records(&self) -> &[Publication] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn year_range(&self) -> (i32, i32) {
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        for year in self.records.iter().filter_map(|r| r.year) {
            min = min.min(year);
            max = max.max(year);
        }
        (min, max)
    }
}
