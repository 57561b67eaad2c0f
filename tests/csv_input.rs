use std::fs;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use kira_bibliometrics::io::csv_input::read_table;
use kira_bibliometrics::records::load;
use tempfile::TempDir;

const HEADER: &str = "Authors,Author full names,Author(s) ID,Title,Year,Source title,Volume,Issue,Page start,Page end,Cited by,Affiliations,Author Keywords,EID\n";

fn sample() -> String {
    let mut s = String::from('\u{feff}');
    s.push_str(HEADER);
    s.push_str("\"Smith J., Doe A.\",\"Smith, John; Doe, Ann\",1;2,\"Title, with comma\",2020,Scientometrics,12,3,1,10,4,\"Univ X\",\"bibliometrics; networks\",e1\n");
    s.push_str("Lee K.,\"Lee, Kim\",3,Second,2021,JASIST,,,,,,,,e2\n");
    s
}

#[test]
fn reads_quoted_fields_and_strips_bom() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("scopus.csv");
    fs::write(&path, sample()).unwrap();

    let table = read_table(&path).unwrap();
    assert_eq!(table.headers[0], "Authors");
    assert_eq!(table.headers.len(), 14);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][0], "Smith J., Doe A.");
    assert_eq!(table.rows[0][3], "Title, with comma");

    let ds = load(table).unwrap();
    assert_eq!(ds.records()[0].author_tokens(), vec!["Smith J.", "Doe A."]);
    assert_eq!(ds.records()[1].cited_by, None);
    assert_eq!(ds.years(), &[2020, 2021]);
}

#[test]
fn reads_gzip_input() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("scopus.csv.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(sample().as_bytes()).unwrap();
    fs::write(&path, enc.finish().unwrap()).unwrap();

    let table = read_table(&path).unwrap();
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1][0], "Lee K.");
}

#[test]
fn missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = read_table(&tmp.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, kira_bibliometrics::AnalysisError::Io(_)));
}
