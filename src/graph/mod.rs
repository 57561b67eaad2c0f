use std::collections::{HashMap, HashSet};

use crate::records::FilteredView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoauthorEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

impl CoauthorEdge {
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Weighted undirected co-authorship graph.
///
/// Edges appear in the order their author pair was first seen; `source` and
/// `target` keep the orientation of that first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoauthorGraph {
    edges: Vec<CoauthorEdge>,
}

impl CoauthorGraph {
    pub fn edges(&self) -> &[CoauthorEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        self.edges.iter().find(|e| e.connects(a, b)).map(|e| e.weight)
    }

    pub fn nodes(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for edge in &self.edges {
            for name in [edge.source.as_str(), edge.target.as_str()] {
                if seen.insert(name) {
                    out.push(name);
                }
            }
        }
        out
    }
}

pub fn build_graph(view: &FilteredView) -> CoauthorGraph {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut edges: Vec<CoauthorEdge> = Vec::new();

    for record in view.records() {
        let authors = distinct_in_order(record.author_tokens());
        for i in 0..authors.len() {
            for j in (i + 1)..authors.len() {
                let (a, b) = (&authors[i], &authors[j]);
                let key = if a <= b {
                    (a.clone(), b.clone())
                } else {
                    (b.clone(), a.clone())
                };
                if let Some(&pos) = index.get(&key) {
                    edges[pos].weight += 1;
                } else {
                    index.insert(key, edges.len());
                    edges.push(CoauthorEdge {
                        source: a.clone(),
                        target: b.clone(),
                        weight: 1,
                    });
                }
            }
        }
    }

    CoauthorGraph { edges }
}

fn distinct_in_order(tokens: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
