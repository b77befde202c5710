/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Yields every unordered pair `(i, j)` with `i < j` over `0..n`.
pub fn index_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_values() {
        assert_eq!(mean(&[5.0, -3.0]), 1.0);
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn test_index_pairs_of_five() {
        let pairs: Vec<_> = index_pairs(5).collect();
        assert_eq!(pairs.len(), 10);
        assert_eq!(pairs.first(), Some(&(0, 1)));
        assert_eq!(pairs.last(), Some(&(3, 4)));
        assert!(pairs.iter().all(|(i, j)| i < j));
    }

    #[test]
    fn test_index_pairs_degenerate() {
        assert_eq!(index_pairs(0).count(), 0);
        assert_eq!(index_pairs(1).count(), 0);
    }
}
