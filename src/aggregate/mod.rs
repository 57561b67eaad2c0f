//! Counting passes over a [`FilteredView`](crate::records::FilteredView).
//!
//! Every ranking sorted by value is a stable descending sort over
//! first-encountered order, so equal values keep the order in which their
//! keys first appeared in the view.

mod by_year;
mod citations;
mod counts;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::AddAssign;

pub use by_year::{count_by_year, growth_pct};
pub use citations::{
    DistStats, average_citations_by_year, citation_distribution, citations_by_author, correlation,
};
pub use counts::{count_by_author, count_by_keyword, count_by_source, total_unique_authors};

#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry<K, V> {
    pub key: K,
    pub value: V,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<K, V> {
    entries: Vec<RankEntry<K, V>>,
}

impl<K, V> Ranking<K, V> {
    /// Keeps the given order.
    pub fn from_entries(entries: Vec<RankEntry<K, V>>) -> Self {
        Self { entries }
    }

    pub fn descending(mut entries: Vec<RankEntry<K, V>>) -> Self
    where
        V: PartialOrd,
    {
        entries.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
        Self { entries }
    }

    pub fn top(&self, n: usize) -> Self
    where
        K: Clone,
        V: Clone,
    {
        Self {
            entries: self.entries.iter().take(n).cloned().collect(),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|e| e.key.borrow() == key)
            .map(|e| &e.value)
    }

    pub fn entries(&self) -> &[RankEntry<K, V>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankEntry<K, V>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Insertion-ordered accumulator keyed by token.
struct Tally<V> {
    index: HashMap<String, usize>,
    entries: Vec<RankEntry<String, V>>,
}

impl<V> Tally<V>
where
    V: Copy + AddAssign + PartialOrd,
{
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn add(&mut self, key: &str, delta: V) {
        if let Some(&i) = self.index.get(key) {
            self.entries[i].value += delta;
        } else {
            self.index.insert(key.to_string(), self.entries.len());
            self.entries.push(RankEntry {
                key: key.to_string(),
                value: delta,
            });
        }
    }

    fn into_ranking(self) -> Ranking<String, V> {
        Ranking::descending(self.entries)
    }
}
