use std::collections::BTreeMap;

use crate::aggregate::{RankEntry, Ranking, Tally};
use crate::math::stats::{mean, median, pearson, percentile};
use crate::records::FilteredView;

#[derive(Debug, Clone, PartialEq)]
pub struct DistStats {
    pub count: usize,
    pub total: f64,
    pub mean: f64,
    pub median: f64,
    pub p90: f64,
    pub max: f64,
}

/// Each record's full citation count is credited to every author on it.
pub fn citations_by_author(view: &FilteredView) -> Ranking<String, f64> {
    let mut tally = Tally::new();
    for record in view.records() {
        let cited = record.cited_by_or_zero();
        for author in record.author_tokens() {
            tally.add(&author, cited);
        }
    }
    tally.into_ranking()
}

/// Pearson r between author count and citations over records carrying both.
pub fn correlation(view: &FilteredView) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = view
        .records()
        .iter()
        .filter_map(|r| {
            let n_authors = r.author_tokens().len();
            match (n_authors, r.cited_by) {
                (0, _) | (_, None) => None,
                (n, Some(c)) => Some((n as f64, c)),
            }
        })
        .collect();
    pearson(&pairs)
}

pub fn average_citations_by_year(view: &FilteredView) -> Ranking<i32, f64> {
    let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for record in view.records() {
        if let Some(year) = record.year {
            by_year
                .entry(year)
                .or_default()
                .push(record.cited_by_or_zero());
        }
    }
    Ranking::from_entries(
        by_year
            .into_iter()
            .map(|(key, values)| RankEntry {
                key,
                value: mean(&values),
            })
            .collect(),
    )
}

pub fn citation_distribution(view: &FilteredView) -> DistStats {
    let mut values: Vec<f64> = view.records().iter().map(|r| r.cited_by_or_zero()).collect();
    let total: f64 = values.iter().sum();
    let avg = mean(&values);
    let max = values.iter().copied().fold(0.0, f64::max);
    let med = median(&mut values);
    let p90 = percentile(&mut values, 90.0);
    DistStats {
        count: values.len(),
        total,
        mean: avg,
        median: med,
        p90,
        max,
    }
}
