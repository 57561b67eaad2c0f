use std::collections::BTreeMap;

use tracing::debug;

use crate::aggregate::{self, DistStats, Ranking};
use crate::graph::{self, CoauthorGraph};
use crate::records::FilteredView;

pub const DEFAULT_TOP_N: usize = 10;

/// Everything the report layer needs from one run over a filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub start_year: i32,
    pub record_count: usize,
    pub year_range: (i32, i32),
    pub total_unique_authors: usize,
    pub publications_by_year: Ranking<i32, usize>,
    pub growth_pct_by_year: BTreeMap<i32, f64>,
    pub top_sources: Ranking<String, usize>,
    pub top_authors_by_count: Ranking<String, usize>,
    pub top_keywords: Ranking<String, usize>,
    pub top_authors_by_citations: Ranking<String, f64>,
    pub correlation_authors_vs_citations: Option<f64>,
    pub average_citations_by_year: Ranking<i32, f64>,
    pub citation_distribution: DistStats,
    pub coauthor_graph: CoauthorGraph,
    pub wordcloud_source_text: String,
}

pub fn analyze(view: &FilteredView, top_n: usize) -> AnalysisResult {
    let publications_by_year = aggregate::count_by_year(view);
    let growth_pct_by_year = aggregate::growth_pct(&publications_by_year);
    let coauthor_graph = graph::build_graph(view);
    debug!(
        edges = coauthor_graph.len(),
        years = publications_by_year.len(),
        "aggregates_computed"
    );

    AnalysisResult {
        start_year: view.start_year(),
        record_count: view.len(),
        year_range: view.year_range(),
        total_unique_authors: aggregate::total_unique_authors(view),
        publications_by_year,
        growth_pct_by_year,
        top_sources: aggregate::count_by_source(view).top(top_n),
        top_authors_by_count: aggregate::count_by_author(view).top(top_n),
        top_keywords: aggregate::count_by_keyword(view).top(top_n),
        top_authors_by_citations: aggregate::citations_by_author(view).top(top_n),
        correlation_authors_vs_citations: aggregate::correlation(view),
        average_citations_by_year: aggregate::average_citations_by_year(view),
        citation_distribution: aggregate::citation_distribution(view),
        coauthor_graph,
        wordcloud_source_text: wordcloud_text(view),
    }
}

fn wordcloud_text(view: &FilteredView) -> String {
    view.records()
        .iter()
        .filter_map(|r| r.title.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}
