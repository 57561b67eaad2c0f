use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let result = ctx.result.as_ref().context("analysis result missing")?;
    let loaded = ctx.report.input_meta.rows_loaded;
    let (year_min, year_max) = result.year_range;

    let mut out = String::new();
    out.push_str(&format!("kira-bibliometrics v{}\n", version));
    out.push_str(&format!(
        "Input: {} records, {} from {} onwards\n",
        loaded, result.record_count, result.start_year
    ));
    out.push_str(&format!("Time Period: {} - {}\n", year_min, year_max));
    out.push_str(&format!(
        "Unique Authors: {}\n",
        result.total_unique_authors
    ));
    match result.correlation_authors_vs_citations {
        Some(r) => out.push_str(&format!("Correlation (authors vs citations): {:.2}\n", r)),
        None => out.push_str("Correlation (authors vs citations): n/a\n"),
    }
    out.push_str(&format!(
        "Co-authorship: {} authors, {} edges\n",
        result.coauthor_graph.nodes().len(),
        result.coauthor_graph.len()
    ));

    Ok(out)
}
