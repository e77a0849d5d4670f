//! Density-connectivity clustering.
//!
//! `sweep-dbscan` groups points whose eps-neighborhoods chain together. The
//! neighbor search sweeps points sorted on their most spread-out dimension,
//! and the neighborhood graph is built in parallel with rayon.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`Dbscan`]: the clusterer and its configuration
//! - [`ClusterablePoint`]: what a point must expose
//! - the individual phases (dimension selection, ordering, neighborhood graph)

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    AppendOnlySet, ClusterablePoint, Clusterer, Dbscan, NamedPoint, Neighborhood,
    NeighborhoodGraph,
};
pub use error::{Error, Result};
