use std::path::PathBuf;

use crate::analysis::{AnalysisResult, DEFAULT_TOP_N};
use crate::records::{Dataset, FilteredView};
use crate::schema::v1::BibliometricsV1;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub start_year: Option<i32>,
    pub top_n: usize,
    pub write_json: bool,
    pub write_tsv: bool,
    pub dataset: Option<Dataset>,
    pub view: Option<FilteredView>,
    pub result: Option<AnalysisResult>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: BibliometricsV1,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        start_year: Option<i32>,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("bibliometrics.json");
        let report = BibliometricsV1::empty(tool_version, &input.display().to_string());
        Self {
            input,
            start_year,
            top_n: DEFAULT_TOP_N,
            write_json,
            write_tsv,
            dataset: None,
            view: None,
            result: None,
            warnings: Vec::new(),
            output: OutputPaths { out_dir, json_path },
            report,
        }
    }
}
