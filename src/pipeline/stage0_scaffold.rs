use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage0Scaffold;

impl Stage0Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Scaffold {
    fn name(&self) -> &'static str {
        "stage0_scaffold"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.write_json && !ctx.write_tsv {
            return Ok(());
        }
        fs::create_dir_all(&ctx.output.out_dir).with_context(|| {
            format!(
                "failed to create output dir {}",
                ctx.output.out_dir.display()
            )
        })?;
        info!(
            out_dir = %ctx.output.out_dir.display(),
            "output_dir_ready"
        );
        Ok(())
    }
}
