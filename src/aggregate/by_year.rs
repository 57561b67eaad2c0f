use std::collections::BTreeMap;

use crate::aggregate::{RankEntry, Ranking};
use crate::math::stats::round1;
use crate::records::FilteredView;

/// Publication count per year, ascending by year.
pub fn count_by_year(view: &FilteredView) -> Ranking<i32, usize> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for year in view.records().iter().filter_map(|r| r.year) {
        *counts.entry(year).or_insert(0) += 1;
    }
    Ranking::from_entries(
        counts
            .into_iter()
            .map(|(key, value)| RankEntry { key, value })
            .collect(),
    )
}

/// Percent change against the previous year present in `by_year`.
///
/// The first year is 0.0, as is any year whose predecessor has a zero count.
pub fn growth_pct(by_year: &Ranking<i32, usize>) -> BTreeMap<i32, f64> {
    let mut out = BTreeMap::new();
    let mut prev: Option<usize> = None;
    for entry in by_year.iter() {
        let pct = match prev {
            Some(p) if p > 0 => 100.0 * (entry.value as f64 - p as f64) / p as f64,
            _ => 0.0,
        };
        out.insert(entry.key, round1(pct));
        prev = Some(entry.value);
    }
    out
}
