//! DBSCAN-style density-connectivity clustering with a sorted sweep.
//!
//! # The Algorithm
//!
//! Two points are in the same cluster if one can be reached from the other by
//! a chain of points, each within `eps` of the next. Connected groups smaller
//! than `min_pts` are noise.
//!
//! 1. **Sort dimension**: pick the dimension with the largest sample variance
//!    (or use a fixed one).
//! 2. **Ordering**: stably sort point positions on that coordinate.
//! 3. **Neighborhood graph**: for every point, scan forward through the sorted
//!    order until the sort coordinate leaves `[x, x + eps]`, and link every
//!    point within `eps` in both directions. Runs on the rayon pool.
//! 4. **Expansion**: iterative depth-first search over the graph; each
//!    connected component with at least `min_pts` points is a cluster.
//!
//! ## Differences from Ester et al. (1996)
//!
//! There is no core/border distinction. Every point expands its neighbors, so
//! a cluster is exactly a connected component of the eps-graph, filtered by
//! size. On data with uneven density this joins regions that textbook DBSCAN
//! would keep apart (a thin bridge of sparse points links two dense blobs).
//!
//! ## Complexity
//!
//! - **Time**: O(n log n) for the sort plus the sweep, which is O(n * w) where
//!   `w` is the number of points inside an `eps` slab on the sort dimension.
//!   Degrades to O(n²) when everything lies in one slab.
//! - **Space**: O(n + edges) for the neighborhood graph.

use log::debug;

use super::neighborhood::{build_neighborhood, Neighborhood, NeighborhoodGraph};
use super::ordering::sorted_order;
use super::point::ClusterablePoint;
use super::traits::Clusterer;
use super::variance::predict_dimension_by_max_variance;
use crate::error::{Error, Result};

/// Density-connectivity clusterer.
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Epsilon: maximum distance between directly linked points.
    epsilon: f64,
    /// `epsilon²`, kept in step with `epsilon`.
    epsilon_squared: f64,
    /// Minimum component size kept as a cluster.
    min_pts: usize,
    /// Recompute the sort dimension from the data on every call.
    auto_select_dimension: bool,
    /// Sort dimension used when auto-selection is off.
    sort_dimension: usize,
}

fn check_epsilon(epsilon: f64) -> Result<()> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "epsilon",
            message: "must be positive and finite",
        });
    }
    Ok(())
}

fn check_min_pts(min_pts: usize) -> Result<()> {
    if min_pts == 0 {
        return Err(Error::InvalidParameter {
            name: "min_pts",
            message: "must be at least 1",
        });
    }
    Ok(())
}

/// Dimensionality of `points`, after checking every point agrees with the
/// first one and holds only finite values.
fn check_points<P: ClusterablePoint>(points: &[P]) -> Result<usize> {
    let dimensions = points[0].coordinates().len();
    if dimensions == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be at least 1",
        });
    }

    for (index, p) in points.iter().enumerate() {
        let coords = p.coordinates();
        if coords.len() != dimensions {
            return Err(Error::DimensionMismatch {
                index,
                expected: dimensions,
                found: coords.len(),
            });
        }
        if let Some(dimension) = coords.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteCoordinate { index, dimension });
        }
    }
    Ok(dimensions)
}

/// Connected components of `graph` with at least `min_pts` members, in
/// depth-first visiting order.
fn expand_clusters(graph: &NeighborhoodGraph, min_pts: usize) -> Vec<Vec<usize>> {
    let n = graph.len();
    let mut visited = vec![false; n];
    let mut clusters = Vec::new();
    let mut stack: Vec<usize> = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }

        let mut cluster = Vec::new();
        stack.push(start);

        while let Some(pos) = stack.pop() {
            // A position can be pushed by several neighbors before it is visited.
            if visited[pos] {
                continue;
            }
            visited[pos] = true;
            cluster.push(pos);
            stack.extend_from_slice(graph.neighbors(pos));
        }

        if cluster.len() >= min_pts {
            clusters.push(cluster);
        } else {
            log::trace!("dropping component of {} points as noise", cluster.len());
        }
    }
    clusters
}

impl Dbscan {
    /// Create a new clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two directly linked points.
    /// * `min_pts` - Minimum number of points in a cluster; smaller connected
    ///   groups are noise.
    ///
    /// The sort dimension is picked from the data by default.
    pub fn new(epsilon: f64, min_pts: usize) -> Result<Self> {
        check_epsilon(epsilon)?;
        check_min_pts(min_pts)?;
        Ok(Self {
            epsilon,
            epsilon_squared: epsilon * epsilon,
            min_pts,
            auto_select_dimension: true,
            sort_dimension: 0,
        })
    }

    /// Neighborhood radius.
    pub fn eps(&self) -> f64 {
        self.epsilon
    }

    /// Square of the neighborhood radius.
    pub fn eps_squared(&self) -> f64 {
        self.epsilon_squared
    }

    /// Set the neighborhood radius.
    pub fn set_eps(&mut self, epsilon: f64) -> Result<()> {
        check_epsilon(epsilon)?;
        self.epsilon = epsilon;
        self.epsilon_squared = epsilon * epsilon;
        Ok(())
    }

    /// Minimum cluster size.
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    /// Set the minimum cluster size.
    pub fn set_min_pts(&mut self, min_pts: usize) -> Result<()> {
        check_min_pts(min_pts)?;
        self.min_pts = min_pts;
        Ok(())
    }

    /// Whether the sort dimension is picked from the data on each call.
    pub fn auto_select_dimension(&self) -> bool {
        self.auto_select_dimension
    }

    /// Turn data-driven sort dimension selection on or off.
    pub fn set_auto_select_dimension(&mut self, auto: bool) {
        self.auto_select_dimension = auto;
    }

    /// Builder form of [`set_auto_select_dimension`](Self::set_auto_select_dimension).
    pub fn with_auto_select_dimension(mut self, auto: bool) -> Self {
        self.auto_select_dimension = auto;
        self
    }

    /// Configured sort dimension. Ignored while auto-selection is on.
    ///
    /// Clustering with auto-selection does not write the picked dimension
    /// back here: this keeps returning the configured value, and turning
    /// auto-selection off later sorts on it, not on the last picked one. Use
    /// [`predict_dimension`](Self::predict_dimension) to see what
    /// auto-selection would pick for a dataset.
    pub fn sort_dimension(&self) -> usize {
        self.sort_dimension
    }

    /// Set the sort dimension used when auto-selection is off.
    ///
    /// Checked against the data at clustering time.
    pub fn set_sort_dimension(&mut self, dimension: usize) {
        self.sort_dimension = dimension;
    }

    /// Use a fixed sort dimension and turn auto-selection off.
    pub fn with_sort_dimension(mut self, dimension: usize) -> Self {
        self.sort_dimension = dimension;
        self.auto_select_dimension = false;
        self
    }

    /// Dimension with the largest sample variance in `points`.
    ///
    /// Returns 0 for an empty slice.
    pub fn predict_dimension<P>(&self, points: &[P]) -> Result<usize>
    where
        P: ClusterablePoint + Sync,
    {
        if points.is_empty() {
            return Ok(0);
        }
        let dimensions = check_points(points)?;
        Ok(predict_dimension_by_max_variance(points, dimensions))
    }

    fn resolve_sort_dimension<P>(&self, points: &[P], dimensions: usize) -> Result<usize>
    where
        P: ClusterablePoint + Sync,
    {
        if self.auto_select_dimension {
            return Ok(predict_dimension_by_max_variance(points, dimensions));
        }
        if self.sort_dimension >= dimensions {
            return Err(Error::SortDimensionOutOfRange {
                dimension: self.sort_dimension,
                dimensions,
            });
        }
        Ok(self.sort_dimension)
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self {
            epsilon: 0.5,
            epsilon_squared: 0.25,
            min_pts: 5,
            auto_select_dimension: true,
            sort_dimension: 0,
        }
    }
}

impl Clusterer for Dbscan {
    fn cluster_indices<P>(&self, points: &[P]) -> Result<Vec<Vec<usize>>>
    where
        P: ClusterablePoint + Sync,
    {
        if points.is_empty() {
            return Ok(Vec::new());
        }

        let dimensions = check_points(points)?;
        let sort_dimension = self.resolve_sort_dimension(points, dimensions)?;
        debug!(
            "clustering {} points ({}-d) with eps={}, min_pts={}, sorting on dimension {}",
            points.len(),
            dimensions,
            self.epsilon,
            self.min_pts,
            sort_dimension
        );

        let order = sorted_order(points, sort_dimension);
        let coords: Vec<&[f64]> = order.iter().map(|&i| points[i].coordinates()).collect();

        let neighborhood = build_neighborhood(&coords, sort_dimension, dimensions, self.epsilon);
        let clusters = match neighborhood {
            Neighborhood::Saturated(members) if members.len() >= self.min_pts => vec![members],
            Neighborhood::Saturated(_) => Vec::new(),
            Neighborhood::Graph(graph) => expand_clusters(&graph, self.min_pts),
        };

        // Map sorted positions back to input positions.
        let clusters: Vec<Vec<usize>> = clusters
            .into_iter()
            .map(|members| members.into_iter().map(|pos| order[pos]).collect())
            .collect();

        let clustered: usize = clusters.iter().map(Vec::len).sum();
        debug!(
            "found {} clusters, {} noise points",
            clusters.len(),
            points.len() - clustered
        );
        Ok(clusters)
    }
}
