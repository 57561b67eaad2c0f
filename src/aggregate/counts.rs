use std::collections::HashSet;

use crate::aggregate::{Ranking, Tally};
use crate::records::FilteredView;

pub fn count_by_source(view: &FilteredView) -> Ranking<String, usize> {
    let mut tally = Tally::new();
    for source in view.records().iter().filter_map(|r| r.source_title.as_deref()) {
        tally.add(source, 1);
    }
    tally.into_ranking()
}

/// One increment per author occurrence per record.
pub fn count_by_author(view: &FilteredView) -> Ranking<String, usize> {
    let mut tally = Tally::new();
    for record in view.records() {
        for author in record.author_tokens() {
            tally.add(&author, 1);
        }
    }
    tally.into_ranking()
}

pub fn count_by_keyword(view: &FilteredView) -> Ranking<String, usize> {
    let mut tally = Tally::new();
    for record in view.records() {
        for keyword in record.keyword_tokens() {
            tally.add(&keyword, 1);
        }
    }
    tally.into_ranking()
}

pub fn total_unique_authors(view: &FilteredView) -> usize {
    let mut seen = HashSet::new();
    for record in view.records() {
        seen.extend(record.author_tokens());
    }
    seen.len()
}
