use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregate::Ranking;
use crate::analysis::AnalysisResult;
use crate::ctx::Ctx;

pub const PUBLICATIONS_BY_YEAR_TSV: &str = "publications_by_year.tsv";
pub const TOP_SOURCES_TSV: &str = "top_sources.tsv";
pub const TOP_AUTHORS_TSV: &str = "top_authors.tsv";
pub const TOP_KEYWORDS_TSV: &str = "top_keywords.tsv";
pub const TOP_AUTHORS_BY_CITATIONS_TSV: &str = "top_authors_by_citations.tsv";
pub const COAUTHOR_EDGES_TSV: &str = "coauthor_edges.tsv";

pub fn write_tsv(out_dir: &Path, ctx: &Ctx) -> Result<()> {
    let result = ctx.result.as_ref().context("analysis result missing")?;
    write_publications_by_year(&out_dir.join(PUBLICATIONS_BY_YEAR_TSV), result)?;
    write_counts(
        &out_dir.join(TOP_SOURCES_TSV),
        "source_title\tpublications",
        &result.top_sources,
    )?;
    write_counts(
        &out_dir.join(TOP_AUTHORS_TSV),
        "author\tpublications",
        &result.top_authors_by_count,
    )?;
    write_counts(
        &out_dir.join(TOP_KEYWORDS_TSV),
        "keyword\tcouplings",
        &result.top_keywords,
    )?;

    let mut w = create(&out_dir.join(TOP_AUTHORS_BY_CITATIONS_TSV))?;
    writeln!(w, "author\tcitations")?;
    for e in result.top_authors_by_citations.iter() {
        writeln!(w, "{}\t{}", clean(&e.key), e.value)?;
    }
    w.flush()?;

    let mut w = create(&out_dir.join(COAUTHOR_EDGES_TSV))?;
    writeln!(w, "source\ttarget\tweight")?;
    for e in result.coauthor_graph.edges() {
        writeln!(w, "{}\t{}\t{}", clean(&e.source), clean(&e.target), e.weight)?;
    }
    w.flush()?;

    Ok(())
}

fn write_publications_by_year(path: &Path, result: &AnalysisResult) -> Result<()> {
    let mut w = create(path)?;
    writeln!(w, "year\tpublications\tgrowth_pct")?;
    for e in result.publications_by_year.iter() {
        let growth = result
            .growth_pct_by_year
            .get(&e.key)
            .copied()
            .unwrap_or(0.0);
        writeln!(w, "{}\t{}\t{:.1}", e.key, e.value, growth)?;
    }
    w.flush()?;
    Ok(())
}

fn write_counts(path: &Path, header: &str, ranking: &Ranking<String, usize>) -> Result<()> {
    let mut w = create(path)?;
    writeln!(w, "{}", header)?;
    for e in ranking.iter() {
        writeln!(w, "{}\t{}", clean(&e.key), e.value)?;
    }
    w.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<std::fs::File>> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

// Keys come from free text and may carry separators of their own.
fn clean(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}
