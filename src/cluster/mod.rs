//! Density-connectivity clustering of points in n-dimensional space.
//!
//! Two points share a cluster if a chain of points, each within `eps` of the
//! next, connects them. Connected groups smaller than `min_pts` are noise and
//! are left out of the output.
//!
//! ## Pipeline
//!
//! ```text
//! points ─► sort dimension ─► stable sort ─► neighborhood graph ─► DFS ─► clusters
//!           (max variance)                   (rayon, sorted sweep)
//! ```
//!
//! - [`variance`](mod@variance): picks the dimension with the largest sample variance.
//! - [`ordering`]: stable sort on that dimension.
//! - [`neighborhood`]: forward sweep per point, on the rayon pool, writing
//!   symmetric edges into [`AppendOnlySet`]s.
//! - [`Dbscan`]: configuration plus the single-threaded expansion into
//!   connected components.
//!
//! This is not textbook DBSCAN: every point within reach expands, there is no
//! core/border split. See [`Dbscan`] for the consequences.
//!
//! ## Usage
//!
//! ```rust
//! use sweep_dbscan::cluster::{Clusterer, Dbscan};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//!     vec![50.0, 50.0],
//! ];
//!
//! let dbscan = Dbscan::new(0.5, 2).unwrap();
//! let clusters = dbscan.cluster(&data).unwrap();
//! assert_eq!(clusters.len(), 2);
//!
//! // Per-point labels, noise as `None`
//! let labels = dbscan.fit_predict_with_noise(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//! assert!(labels[4].is_none());
//! ```

mod append_set;
mod dbscan;
pub mod neighborhood;
pub mod ordering;
mod point;
mod traits;
mod util;
pub mod variance;

pub use append_set::AppendOnlySet;
pub use dbscan::Dbscan;
pub use neighborhood::{build_neighborhood, Neighborhood, NeighborhoodGraph};
pub use ordering::{sort_by_dimension, sorted_order};
pub use point::{ClusterablePoint, NamedPoint};
pub use traits::Clusterer;
pub use util::squared_euclidean;
pub use variance::{predict_dimension_by_max_variance, variance};
