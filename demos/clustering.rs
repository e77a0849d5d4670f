//! Sorted-sweep density clustering on a small 2D dataset.
//!
//! Run with `RUST_LOG=debug` to see the chosen sort dimension.

use sweep_dbscan::{Clusterer, Dbscan, NamedPoint};

fn main() {
    env_logger::init();

    // Two groups and one stray point.
    let data: Vec<NamedPoint> = [
        (2.0, 4.0),
        (7.0, 3.0),
        (3.0, 5.0),
        (5.0, 3.0),
        (7.0, 4.0),
        (6.0, 8.0),
        (6.0, 5.0),
        (8.0, 4.0),
        (2.0, 5.0),
        (3.0, 7.0),
    ]
    .iter()
    .enumerate()
    .map(|(i, &(x, y))| NamedPoint::new(format!("p{}", i), vec![x, y]))
    .collect();

    // --- eps = 2.0, min_pts = 2 ---
    let mut dbscan = Dbscan::new(2.0, 2).expect("valid parameters");
    let clusters = dbscan.cluster(&data).expect("consistent points");
    println!("=== eps=2.0, min_pts=2 ===");
    for (i, cluster) in clusters.iter().enumerate() {
        let names: Vec<&str> = cluster.iter().map(|p| p.name.as_str()).collect();
        println!("  cluster {} ({} points): {}", i, cluster.len(), names.join(", "));
    }

    let labels = dbscan.fit_predict_with_noise(&data).expect("consistent points");
    for (p, label) in data.iter().zip(&labels) {
        let tag = match label {
            Some(l) => format!("cluster {}", l),
            None => "NOISE".to_string(),
        };
        println!("  {:>3} ({:4.1}, {:4.1}) => {}", p.name, p.point[0], p.point[1], tag);
    }

    // --- eps = 7.0, fixed sort dimension ---
    dbscan.set_eps(7.0).expect("valid eps");
    dbscan.set_auto_select_dimension(false);
    let clusters = dbscan.cluster(&data).expect("consistent points");
    println!("\n=== eps=7.0, sort dimension {} ===", dbscan.sort_dimension());
    let sizes: Vec<usize> = clusters.iter().map(Vec::len).collect();
    println!("  {} cluster(s), sizes {:?}", clusters.len(), sizes);
}
