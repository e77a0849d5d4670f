//! Picking the sort dimension.
//!
//! The neighborhood sweep prunes on a single coordinate, so it prunes best
//! along the dimension where the points are most spread out. Variance per
//! dimension is computed with Welford's running update, one rayon task per
//! dimension.

use rayon::prelude::*;

use super::point::ClusterablePoint;

/// Sample variance of `points` along `dimension`.
///
/// Returns 0 for fewer than two points.
pub fn variance<P: ClusterablePoint>(points: &[P], dimension: usize) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    let mut mean = 0.0;
    let mut m2 = 0.0;
    for (i, p) in points.iter().enumerate() {
        let v = p.coordinates()[dimension];
        let delta = v - mean;
        mean += delta / (i + 1) as f64;
        m2 += delta * (v - mean);
    }
    m2 / (points.len() - 1) as f64
}

/// Index of the dimension with the largest sample variance.
///
/// Ties keep the lowest index. `dimensions` must not exceed the length of any
/// point's coordinate vector.
pub fn predict_dimension_by_max_variance<P>(points: &[P], dimensions: usize) -> usize
where
    P: ClusterablePoint + Sync,
{
    let variances: Vec<f64> = (0..dimensions)
        .into_par_iter()
        .map(|d| variance(points, d))
        .collect();

    let mut best = 0;
    let mut best_var = f64::NEG_INFINITY;
    for (d, &v) in variances.iter().enumerate() {
        if v > best_var {
            best = d;
            best_var = v;
        }
    }
    log::trace!("per-dimension variance {:?}, picked {}", variances, best);
    best
}
