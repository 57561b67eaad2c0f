use kira_bibliometrics::math::stats::{mean, median, pearson, percentile, round1};

#[test]
fn mean_basic() {
    assert_eq!(mean(&[]), 0.0);
    assert!((mean(&[1.0, 2.0, 6.0]) - 3.0).abs() < 1e-12);
}

#[test]
fn median_odd_even() {
    let mut v1 = vec![3.0, 1.0, 2.0];
    assert_eq!(median(&mut v1), 2.0);
    let mut v2 = vec![4.0, 1.0, 2.0, 3.0];
    assert_eq!(median(&mut v2), 2.5);
}

#[test]
fn percentile_interpolates() {
    let mut v = vec![10.0, 0.0, 5.0, 3.0];
    assert_eq!(percentile(&mut v, 0.0), 0.0);
    assert_eq!(percentile(&mut v, 100.0), 10.0);
    assert!((percentile(&mut v, 90.0) - 8.5).abs() < 1e-9);
}

#[test]
fn pearson_perfect_and_undefined() {
    let r = pearson(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]).unwrap();
    assert!((r - 1.0).abs() < 1e-12);
    assert_eq!(pearson(&[(1.0, 2.0)]), None);
    assert_eq!(pearson(&[(1.0, 2.0), (1.0, 3.0)]), None);
    assert_eq!(pearson(&[(1.0, 2.0), (2.0, 2.0)]), None);
}

#[test]
fn pearson_known_value() {
    // x = 1..5, y = 2,4,5,4,5 -> r = 0.7745966692
    let pairs = [(1.0, 2.0), (2.0, 4.0), (3.0, 5.0), (4.0, 4.0), (5.0, 5.0)];
    let r = pearson(&pairs).unwrap();
    assert!((r - 0.774_596_669_2).abs() < 1e-9);
}

#[test]
fn round1_ties_to_even() {
    assert_eq!(round1(33.333), 33.3);
    assert_eq!(round1(-25.0), -25.0);
    assert_eq!(round1(0.25), 0.2);
    assert_eq!(round1(0.75), 0.8);
}

#[test]
fn pearson_constant_fractional_series_is_undefined() {
    let pairs = [(1.0, 0.1), (2.0, 0.1), (3.0, 0.1), (4.0, 0.1), (5.0, 0.1)];
    assert_eq!(pearson(&pairs), None);
    let pairs = [(0.7, 1.0), (0.7, 2.0), (0.7, 5.0)];
    assert_eq!(pearson(&pairs), None);
}
