use knapbench_utils::median;

#[test]
fn test_median_odd() {
    assert_eq!(median(&[0.5, 0.1, 0.3, 0.4, 0.2]), Some(0.3));
}

#[test]
fn test_median_even_takes_upper() {
    assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(3.0));
}

#[test]
fn test_median_single_and_empty() {
    assert_eq!(median(&[1.25]), Some(1.25));
    assert_eq!(median(&[]), None);
}
