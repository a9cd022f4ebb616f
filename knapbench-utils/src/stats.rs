/// Median of `samples` as reported by the benchmark: the element at index
/// `len / 2` after sorting, which is the upper median for even counts.
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(sorted[sorted.len() / 2])
}
