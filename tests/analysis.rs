use kira_bibliometrics::analysis::{DEFAULT_TOP_N, analyze};
use kira_bibliometrics::records::{Dataset, REQUIRED_COLUMNS, RawTable, load};

fn dataset() -> Dataset {
    let mut a = vec![String::new(); REQUIRED_COLUMNS.len()];
    a[0] = "A, B".to_string();
    a[3] = "Mapping citation networks".to_string();
    a[4] = "2020".to_string();
    a[5] = "Scientometrics".to_string();
    a[10] = "5".to_string();
    a[12] = "x;y".to_string();

    let mut b = vec![String::new(); REQUIRED_COLUMNS.len()];
    b[0] = "B, C".to_string();
    b[3] = "Keyword coupling".to_string();
    b[4] = "2021".to_string();
    b[5] = "Scientometrics".to_string();
    b[10] = "3".to_string();
    b[12] = "y".to_string();

    load(RawTable {
        headers: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: vec![a, b],
    })
    .unwrap()
}

#[test]
fn end_to_end_two_papers() {
    let ds = dataset();
    let view = ds.filter_from_year(2020).unwrap();
    let result = analyze(&view, DEFAULT_TOP_N);

    assert_eq!(result.record_count, 2);
    assert_eq!(result.year_range, (2020, 2021));
    assert_eq!(result.total_unique_authors, 3);

    let keywords: Vec<(&str, usize)> = result
        .top_keywords
        .iter()
        .map(|e| (e.key.as_str(), e.value))
        .collect();
    assert_eq!(keywords, vec![("y", 2), ("x", 1)]);

    let g = &result.coauthor_graph;
    assert_eq!(g.len(), 2);
    assert_eq!(g.weight("A", "B"), Some(1));
    assert_eq!(g.weight("B", "C"), Some(1));

    assert_eq!(result.growth_pct_by_year[&2020], 0.0);
    assert_eq!(result.growth_pct_by_year[&2021], 0.0);
    assert_eq!(result.top_authors_by_citations.get("B"), Some(&8.0));
    assert_eq!(result.top_sources.get("Scientometrics"), Some(&2));
    // both papers have two authors
    assert_eq!(result.correlation_authors_vs_citations, None);
    assert_eq!(
        result.wordcloud_source_text,
        "Mapping citation networks Keyword coupling"
    );
}

#[test]
fn rerun_is_reproducible_and_independent() {
    let ds = dataset();
    let first = analyze(&ds.filter_from_year(2020).unwrap(), DEFAULT_TOP_N);
    let narrow = analyze(&ds.filter_from_year(2021).unwrap(), DEFAULT_TOP_N);
    let again = analyze(&ds.filter_from_year(2020).unwrap(), DEFAULT_TOP_N);

    assert_eq!(first, again);
    assert_eq!(narrow.record_count, 1);
    assert_eq!(first.record_count, 2);
    assert_eq!(ds.len(), 2);
}

#[test]
fn top_n_limits_rankings_only() {
    let ds = dataset();
    let result = analyze(&ds.filter_from_year(2020).unwrap(), 1);
    assert_eq!(result.top_authors_by_count.len(), 1);
    assert_eq!(result.top_authors_by_count.entries()[0].key, "B");
    assert_eq!(result.top_keywords.len(), 1);
    assert_eq!(result.publications_by_year.len(), 2);
    assert_eq!(result.coauthor_graph.len(), 2);
}
