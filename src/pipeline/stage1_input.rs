use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::csv_input;
use crate::pipeline::Stage;
use crate::records;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = csv_input::read_table(&ctx.input)
            .with_context(|| format!("failed to read {}", ctx.input.display()))?;
        let dataset = records::load(table)?;

        ctx.warnings
            .extend(dataset.warnings().iter().map(|w| w.to_string()));

        ctx.report.input_meta.rows_loaded = dataset.len() as u64;
        ctx.report.input_meta.distinct_years = dataset.years().to_vec();
        ctx.report.input_meta.unique_author_ids = dataset.unique_author_ids() as u64;
        ctx.report.input_meta.malformed_fields = dataset.warnings().len() as u64;

        info!(
            rows = dataset.len(),
            years = dataset.years().len(),
            malformed = dataset.warnings().len(),
            "dataset_loaded"
        );
        ctx.dataset = Some(dataset);
        Ok(())
    }
}
