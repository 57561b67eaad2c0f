use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kira_bibliometrics::cli::{Cli, Commands};
use kira_bibliometrics::ctx::Ctx;
use kira_bibliometrics::io;
use kira_bibliometrics::pipeline::Pipeline;
use kira_bibliometrics::pipeline::stage0_scaffold::Stage0Scaffold;
use kira_bibliometrics::pipeline::stage1_input::Stage1Input;
use kira_bibliometrics::pipeline::stage2_filter::Stage2Filter;
use kira_bibliometrics::pipeline::stage3_analyze::Stage3Analyze;
use kira_bibliometrics::pipeline::stage4_output::Stage4Output;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            if args.top == 0 {
                anyhow::bail!("--top must be at least 1");
            }
            let mut ctx = Ctx::new(
                args.input,
                args.out,
                args.start_year,
                args.json,
                args.tsv,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.top_n = args.top;

            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Input::new()),
                Box::new(Stage2Filter::new()),
                Box::new(Stage3Analyze::new()),
                Box::new(Stage4Output::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let mut ctx = Ctx::new(
                args.input,
                PathBuf::from("."),
                None,
                false,
                false,
                env!("CARGO_PKG_VERSION"),
            );
            let pipeline = Pipeline::new(vec![Box::new(Stage1Input::new())]);
            pipeline.run(&mut ctx)?;

            print_validate_summary(&ctx);
        }
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(&ctx.warnings);
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) {
    println!("kira-bibliometrics validate ok");
    println!("records: {}", ctx.report.input_meta.rows_loaded);
    let years: Vec<String> = ctx
        .report
        .input_meta
        .distinct_years
        .iter()
        .map(|y| y.to_string())
        .collect();
    println!("years: {}", years.join(", "));
    println!("author ids: {}", ctx.report.input_meta.unique_author_ids);
    print_warnings(&ctx.warnings);
}

fn print_warnings(warnings: &[String]) {
    if !warnings.is_empty() {
        println!("warnings:");
        for warning in warnings {
            println!("- {}", warning);
        }
    }
}
