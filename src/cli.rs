use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "kira-bibliometrics",
    version,
    about = "Bibliometric analysis of Scopus CSV exports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Scopus CSV export (.csv or .csv.gz)")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, help = "Keep publications from this year onwards (default: earliest year)")]
    pub start_year: Option<i32>,

    #[arg(long, default_value_t = 10, help = "Number of entries kept per ranking")]
    pub top: usize,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Scopus CSV export (.csv or .csv.gz)")]
    pub input: PathBuf,
}
