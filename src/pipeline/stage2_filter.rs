use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage2Filter;

impl Stage2Filter {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Filter {
    fn name(&self) -> &'static str {
        "stage2_filter"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let dataset = ctx.dataset.as_ref().context("dataset not loaded")?;

        // Without an explicit start year the earliest year present is used.
        let view = match ctx.start_year {
            Some(y) => dataset.filter_from_year(y)?,
            None => dataset.filter_from_earliest()?,
        };
        let start_year = view.start_year();
        let (year_min, year_max) = view.year_range();

        ctx.report.input_meta.start_year = Some(start_year);
        ctx.report.input_meta.rows_retained = Some(view.len() as u64);
        ctx.report.input_meta.year_min = Some(year_min);
        ctx.report.input_meta.year_max = Some(year_max);

        info!(
            start_year,
            retained = view.len(),
            year_min,
            year_max,
            "view_filtered"
        );
        ctx.start_year = Some(start_year);
        ctx.view = Some(view);
        Ok(())
    }
}
