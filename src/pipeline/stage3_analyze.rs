use anyhow::{Context, Result};
use tracing::info;

use crate::analysis;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage3Analyze;

impl Stage3Analyze {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Analyze {
    fn name(&self) -> &'static str {
        "stage3_analyze"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let view = ctx.view.as_ref().context("filtered view missing")?;
        let result = analysis::analyze(view, ctx.top_n);
        if result.correlation_authors_vs_citations.is_none() {
            ctx.warnings.push(
                "correlation undefined (fewer than 2 complete rows or zero variance)".to_string(),
            );
        }
        info!(
            unique_authors = result.total_unique_authors,
            coauthor_edges = result.coauthor_graph.len(),
            "analysis_ready"
        );
        ctx.result = Some(result);
        Ok(())
    }
}
