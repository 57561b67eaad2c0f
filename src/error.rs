use thiserror::Error;

/// Structural failures of the analysis core.
///
/// Per-row problems (a non-numeric `Year` or `Cited by`) are not errors; they
/// are normalized during load and reported as [`crate::records::FieldWarning`].
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("{}", empty_result_message(.start_year))]
    EmptyResult { start_year: Option<i32> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn empty_result_message(start_year: &Option<i32>) -> String {
    match start_year {
        Some(y) => format!("no data available from the year {} onwards", y),
        None => "no data available: no row has a numeric Year".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
