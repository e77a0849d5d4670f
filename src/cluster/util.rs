/// Squared Euclidean distance over the first `dimensions` coordinates.
///
/// Both slices must hold at least `dimensions` values.
#[inline]
pub fn squared_euclidean(a: &[f64], b: &[f64], dimensions: usize) -> f64 {
    debug_assert!(a.len() >= dimensions && b.len() >= dimensions);
    a[..dimensions]
        .iter()
        .zip(&b[..dimensions])
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_euclidean() {
        assert_eq!(squared_euclidean(&[0.0, 0.0], &[3.0, 4.0], 2), 25.0);
        assert_eq!(squared_euclidean(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], 3), 0.0);
        // only the leading dimensions count
        assert_eq!(squared_euclidean(&[0.0, 9.0], &[1.0, -9.0], 1), 1.0);
    }
}
