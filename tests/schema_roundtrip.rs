use kira_bibliometrics::schema::v1::BibliometricsV1;

#[test]
fn schema_roundtrip_v1() {
    let report = BibliometricsV1::empty("0.0.0-test", "scopus.csv");
    let json = serde_json::to_string(&report).unwrap();
    let decoded: BibliometricsV1 = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.tool, "kira-bibliometrics");
    assert_eq!(decoded.schema_version, "v1");
    assert_eq!(decoded.input_meta.path, "scopus.csv");
    assert!(decoded.sections.is_none());
}
