//! Parallel construction of the eps-neighborhood graph.
//!
//! # Sweep
//!
//! Points arrive sorted ascending on one coordinate (the sort dimension). For a
//! point `i`, any `j > i` whose sort coordinate exceeds `x_i + eps` is farther
//! than `eps` in full space too, since a single-coordinate gap is a lower bound
//! on Euclidean distance. So each point only scans forward until that bound is
//! crossed, and records every hit in both directions. Backward edges come from
//! the earlier point's forward scan.
//!
//! # Concurrency
//!
//! Position 0 is scanned first on the calling thread. If it already reaches
//! every point, the whole input is one blob and nothing else is scanned.
//! Otherwise positions `1..n` are scanned on the rayon pool. A worker writes
//! into its own set and into the sets of the points it reaches, so each set is
//! an [`AppendOnlySet`]. The sets are frozen into a [`NeighborhoodGraph`] only
//! after every worker has returned.

use rayon::prelude::*;

use super::append_set::AppendOnlySet;
use super::util::squared_euclidean;

/// Result of building the neighborhood map.
#[derive(Debug, Clone, PartialEq)]
pub enum Neighborhood {
    /// The first point is within reach of every point; holds its neighbor
    /// list (every position, self first). The rest of the graph was not built.
    Saturated(Vec<usize>),
    /// The complete graph.
    Graph(NeighborhoodGraph),
}

/// Read-only neighborhood graph over sorted positions.
///
/// Every position lists itself, and edges are symmetric.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NeighborhoodGraph {
    neighbors: Vec<Vec<usize>>,
}

impl NeighborhoodGraph {
    /// Number of points in the graph.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether the graph has no points.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Positions within eps of `position`, including `position` itself.
    ///
    /// Order depends on worker scheduling.
    pub fn neighbors(&self, position: usize) -> &[usize] {
        &self.neighbors[position]
    }

    /// Whether `b` was recorded as a neighbor of `a`.
    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        self.neighbors[a].contains(&b)
    }
}

/// Build the neighborhood map for points sorted on `sort_dimension`.
///
/// `coords[k]` is the coordinate vector of the k-th point in sorted order.
/// Distances are compared against `eps²`, derived here from `eps`.
///
/// # Panics
///
/// Panics if any entry of `coords` holds fewer than `dimensions` values, or if
/// `sort_dimension >= dimensions`.
pub fn build_neighborhood(
    coords: &[&[f64]],
    sort_dimension: usize,
    dimensions: usize,
    eps: f64,
) -> Neighborhood {
    assert!(
        sort_dimension < dimensions,
        "sort dimension {sort_dimension} out of range for {dimensions} dimensions"
    );
    let eps_squared = eps * eps;
    let n = coords.len();
    if n == 0 {
        return Neighborhood::Graph(NeighborhoodGraph::default());
    }

    let sets: Vec<AppendOnlySet> = (0..n).map(|_| AppendOnlySet::new()).collect();

    let scan = |i: usize| {
        let head = coords[i];
        let limit = head[sort_dimension] + eps;
        sets[i].add(i);

        for (j, other) in coords.iter().enumerate().skip(i + 1) {
            if other[sort_dimension] > limit {
                break;
            }
            if squared_euclidean(head, other, dimensions) <= eps_squared {
                sets[i].add(j);
                sets[j].add(i);
            }
        }
    };

    scan(0);
    if sets[0].len() == n {
        log::debug!("first point reaches all {} points, skipping graph build", n);
        return Neighborhood::Saturated(sets[0].snapshot());
    }

    (1..n).into_par_iter().for_each(scan);

    Neighborhood::Graph(NeighborhoodGraph {
        neighbors: sets.into_iter().map(AppendOnlySet::into_vec).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(coords: &[&[f64]], eps: f64) -> NeighborhoodGraph {
        match build_neighborhood(coords, 0, coords[0].len(), eps) {
            Neighborhood::Graph(g) => g,
            Neighborhood::Saturated(_) => panic!("unexpected saturation"),
        }
    }

    #[test]
    fn test_edges_symmetric_and_self_included() {
        let raw: Vec<[f64; 2]> = vec![
            [0.0, 0.0],
            [0.5, 0.0],
            [0.9, 0.3],
            [1.0, 5.0],
            [3.0, 0.0],
            [3.2, 0.1],
            [9.0, 9.0],
        ];
        let coords: Vec<&[f64]> = raw.iter().map(|p| p.as_slice()).collect();
        let g = graph(&coords, 0.6);

        assert_eq!(g.len(), raw.len());
        for a in 0..g.len() {
            assert!(g.contains_edge(a, a));
            for &b in g.neighbors(a) {
                assert!(g.contains_edge(b, a), "edge {a}->{b} has no reverse");
            }
        }
        assert!(g.contains_edge(0, 1));
        assert!(g.contains_edge(1, 2));
        assert!(!g.contains_edge(0, 2));
        assert!(g.contains_edge(4, 5));
        assert_eq!(g.neighbors(6), &[6]);
    }

    #[test]
    fn test_matches_brute_force() {
        let raw: Vec<[f64; 3]> = (0..40)
            .map(|i| {
                let t = i as f64;
                [(t * 0.37) % 5.0, (t * 1.13) % 3.0, (t * 0.71) % 2.0]
            })
            .collect();
        let mut sorted = raw.clone();
        sorted.sort_by(|a, b| a[0].total_cmp(&b[0]));
        let coords: Vec<&[f64]> = sorted.iter().map(|p| p.as_slice()).collect();

        let eps = 0.8;
        let g = graph(&coords, eps);
        for a in 0..coords.len() {
            let mut got = g.neighbors(a).to_vec();
            got.sort_unstable();
            let want: Vec<usize> = (0..coords.len())
                .filter(|&b| squared_euclidean(coords[a], coords[b], 3) <= eps * eps)
                .collect();
            assert_eq!(got, want, "neighbors of {a}");
        }
    }

    #[test]
    fn test_saturated_when_first_point_reaches_all() {
        let raw = [[0.0], [1.0], [2.0]];
        let coords: Vec<&[f64]> = raw.iter().map(|p| p.as_slice()).collect();
        assert_eq!(
            build_neighborhood(&coords, 0, 1, 5.0),
            Neighborhood::Saturated(vec![0, 1, 2])
        );
    }

    #[test]
    fn test_single_point_is_saturated() {
        let raw = [[4.0, 2.0]];
        let coords: Vec<&[f64]> = raw.iter().map(|p| p.as_slice()).collect();
        assert_eq!(
            build_neighborhood(&coords, 1, 2, 0.1),
            Neighborhood::Saturated(vec![0])
        );
    }

    #[test]
    fn test_points_exactly_eps_apart_are_linked() {
        let raw = [[0.0, 0.0], [0.0, 1.5], [1.5, 1.5], [5.0, 5.0]];
        let coords: Vec<&[f64]> = raw.iter().map(|p| p.as_slice()).collect();
        let g = graph(&coords, 1.5);
        assert!(g.contains_edge(0, 1));
        assert!(g.contains_edge(1, 2));
        assert!(!g.contains_edge(0, 2));
    }

    #[test]
    #[should_panic(expected = "sort dimension")]
    fn test_sort_dimension_out_of_range_panics() {
        let raw = [[0.0, 1.0], [2.0, 3.0]];
        let coords: Vec<&[f64]> = raw.iter().map(|p| p.as_slice()).collect();
        build_neighborhood(&coords, 2, 2, 1.0);
    }
}
