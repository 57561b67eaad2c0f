use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::io::open_maybe_gz;
use crate::records::RawTable;

const BOM: char = '\u{feff}';

pub fn read_table(path: &Path) -> Result<RawTable> {
    let reader = open_maybe_gz(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches(BOM).to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    info!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "csv_read"
    );
    Ok(RawTable { headers, rows })
}
