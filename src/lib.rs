pub mod aggregate;
pub mod analysis;
pub mod cli;
pub mod ctx;
pub mod error;
pub mod fields;
pub mod graph;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod records;
pub mod schema;

pub use error::AnalysisError;
