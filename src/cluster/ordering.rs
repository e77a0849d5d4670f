//! Stable ordering of points along one dimension.

use std::cmp::Ordering;

use super::point::ClusterablePoint;

#[inline]
fn by_dimension<P: ClusterablePoint>(a: &P, b: &P, dimension: usize) -> Ordering {
    a.coordinates()[dimension].total_cmp(&b.coordinates()[dimension])
}

/// Sort `points` in place, ascending by the coordinate at `dimension`.
///
/// The sort is stable: points with equal keys keep their relative order.
pub fn sort_by_dimension<P: ClusterablePoint>(points: &mut [P], dimension: usize) {
    points.sort_by(|a, b| by_dimension(a, b, dimension));
}

/// Input positions of `points`, stably sorted by the coordinate at `dimension`.
///
/// `order[k]` is the input position of the k-th smallest point. The input
/// slice itself is left untouched.
pub fn sorted_order<P: ClusterablePoint>(points: &[P], dimension: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| by_dimension(&points[a], &points[b], dimension));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::point::NamedPoint;

    fn is_sorted_on(points: &[NamedPoint], dimension: usize) -> bool {
        points
            .windows(2)
            .all(|w| w[0].point[dimension] <= w[1].point[dimension])
    }

    #[test]
    fn test_sort_by_either_dimension() {
        let size = 10;
        let mut data: Vec<NamedPoint> = (0..size)
            .map(|i| NamedPoint::new(i.to_string(), vec![i as f64, (size - i - 1) as f64]))
            .collect();

        sort_by_dimension(&mut data, 1);
        assert!(is_sorted_on(&data, 1));
        assert_eq!(data[0].name, "9");

        sort_by_dimension(&mut data, 0);
        assert!(is_sorted_on(&data, 0));
        assert_eq!(data[0].name, "0");
    }

    #[test]
    fn test_sort_is_stable() {
        let mut data = vec![
            NamedPoint::new("a", vec![1.0, 0.0]),
            NamedPoint::new("b", vec![0.0, 0.0]),
            NamedPoint::new("c", vec![1.0, 0.0]),
            NamedPoint::new("d", vec![0.0, 0.0]),
        ];
        sort_by_dimension(&mut data, 0);
        let names: Vec<&str> = data.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sorted_order_leaves_input_alone() {
        let data = vec![vec![3.0], vec![1.0], vec![2.0], vec![1.0]];
        let order = sorted_order(&data, 0);
        assert_eq!(order, vec![1, 3, 2, 0]);
        assert_eq!(data[0], vec![3.0]);
    }
}
