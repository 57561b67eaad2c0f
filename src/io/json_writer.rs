use std::path::Path;

use anyhow::{Context, Result};

use crate::analysis::AnalysisResult;
use crate::ctx::Ctx;
use crate::schema::v1::{
    BibliometricsV1, CitationRow, CitationStats, CoauthorNetwork, CountRow, EdgeRow, Sections,
    SummaryInfo, YearRow,
};

pub fn build_report(ctx: &Ctx) -> Result<BibliometricsV1> {
    let result = ctx.result.as_ref().context("analysis result missing")?;
    let mut report = ctx.report.clone();
    report.version = env!("CARGO_PKG_VERSION").to_string();
    report.sections = Some(build_sections(result));
    Ok(report)
}

pub fn build_sections(result: &AnalysisResult) -> Sections {
    let (year_min, year_max) = result.year_range;

    let publications_by_year = result
        .publications_by_year
        .iter()
        .map(|e| YearRow {
            year: e.key,
            publications: e.value as u64,
            growth_pct: result
                .growth_pct_by_year
                .get(&e.key)
                .copied()
                .unwrap_or(0.0),
            average_citations: result
                .average_citations_by_year
                .get(&e.key)
                .copied()
                .unwrap_or(0.0),
        })
        .collect();

    let dist = &result.citation_distribution;
    let graph = &result.coauthor_graph;

    Sections {
        summary: SummaryInfo {
            time_period: format!("{} - {}", year_min, year_max),
            unique_authors: result.total_unique_authors as u64,
            correlation_authors_vs_citations: result.correlation_authors_vs_citations,
        },
        publications_by_year,
        top_sources: count_rows(&result.top_sources),
        top_authors: count_rows(&result.top_authors_by_count),
        top_keywords: count_rows(&result.top_keywords),
        top_authors_by_citations: result
            .top_authors_by_citations
            .iter()
            .map(|e| CitationRow {
                author: e.key.clone(),
                citations: e.value,
            })
            .collect(),
        citation_distribution: CitationStats {
            count: dist.count as u64,
            total: dist.total,
            mean: dist.mean,
            median: dist.median,
            p90: dist.p90,
            max: dist.max,
        },
        coauthor_network: CoauthorNetwork {
            nodes: graph.nodes().len() as u64,
            edges: graph
                .edges()
                .iter()
                .map(|e| EdgeRow {
                    source: e.source.clone(),
                    target: e.target.clone(),
                    weight: e.weight,
                })
                .collect(),
        },
        wordcloud_text: result.wordcloud_source_text.clone(),
    }
}

pub fn write_json(path: &Path, report: &BibliometricsV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

fn count_rows(ranking: &crate::aggregate::Ranking<String, usize>) -> Vec<CountRow> {
    ranking
        .iter()
        .map(|e| CountRow {
            name: e.key.clone(),
            count: e.value as u64,
        })
        .collect()
}
