use serde::{Deserialize, Serialize};

pub const TOOL_NAME: &str = "kira-bibliometrics";
pub const SCHEMA_VERSION: &str = "v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub path: String,
    pub rows_loaded: u64,
    pub rows_retained: Option<u64>,
    pub start_year: Option<i32>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub distinct_years: Vec<i32>,
    pub unique_author_ids: u64,
    pub malformed_fields: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryInfo {
    pub time_period: String,
    pub unique_authors: u64,
    pub correlation_authors_vs_citations: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRow {
    pub year: i32,
    pub publications: u64,
    pub growth_pct: f64,
    pub average_citations: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountRow {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationRow {
    pub author: String,
    pub citations: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationStats {
    pub count: u64,
    pub total: f64,
    pub mean: f64,
    pub median: f64,
    pub p90: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRow {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoauthorNetwork {
    pub nodes: u64,
    pub edges: Vec<EdgeRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sections {
    pub summary: SummaryInfo,
    pub publications_by_year: Vec<YearRow>,
    pub top_sources: Vec<CountRow>,
    pub top_authors: Vec<CountRow>,
    pub top_keywords: Vec<CountRow>,
    pub top_authors_by_citations: Vec<CitationRow>,
    pub citation_distribution: CitationStats,
    pub coauthor_network: CoauthorNetwork,
    pub wordcloud_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BibliometricsV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub sections: Option<Sections>,
}

impl BibliometricsV1 {
    pub fn empty(tool_version: &str, input_path: &str) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            version: tool_version.to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            input_meta: InputMeta {
                path: input_path.to_string(),
                rows_loaded: 0,
                rows_retained: None,
                start_year: None,
                year_min: None,
                year_max: None,
                distinct_years: Vec::new(),
                unique_author_ids: 0,
                malformed_fields: 0,
            },
            sections: None,
        }
    }
}
