//! Dataset-level aggregate helpers shared by the risk calculators.
//!
//! Everything here is a pure function over a fully materialized column;
//! the scoring pipeline needs these aggregates before it can emit any row.

use std::cmp::Ordering;

/// Floor applied to normalization denominators so degenerate ranges divide
/// cleanly instead of erroring.
pub const RANGE_EPSILON: f64 = 1e-6;

/// Floor applied to mitigation-term means to prevent division by zero.
pub const MEAN_FLOOR: f64 = 1e-6;

/// Arithmetic mean, floored from below.
pub fn floored_mean(values: &[f64], floor: f64) -> f64 {
    if values.is_empty() {
        return floor;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    mean.max(floor)
}

/// Minimum and maximum of a sequence, or `None` when it is empty.
pub fn min_max<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}

/// Fractional percentile rank with average-rank tie handling.
///
/// Present values are ranked ascending (rank 1 = smallest); tied values all
/// receive the average of the ranks their group occupies. Ranks are divided
/// by the count of present values, giving results in (0, 1]. Missing values
/// rank as 0 and do not contribute to the denominator.
pub fn fractional_percentile_rank(values: &[Option<f64>]) -> Vec<f64> {
    let mut present: Vec<(usize, f64)> = values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| value.map(|value| (index, value)))
        .collect();
    let mut ranks = vec![0.0; values.len()];
    let count = present.len();
    if count == 0 {
        return ranks;
    }

    present.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    let mut start = 0;
    while start < count {
        let mut end = start;
        while end + 1 < count && present[end + 1].1 == present[start].1 {
            end += 1;
        }
        // Ranks are 1-based; a tie group spanning ranks start+1..=end+1
        // averages to the midpoint of the group.
        let average_rank = (start + 1 + end + 1) as f64 / 2.0;
        for &(index, _) in &present[start..=end] {
            ranks[index] = average_rank / count as f64;
        }
        start = end + 1;
    }

    ranks
}
