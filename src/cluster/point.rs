//! Points the engine can cluster.
//!
//! The engine never owns or mutates points: it only reads each point's
//! coordinate vector and hands references back inside clusters. Identity is
//! whatever the caller's type provides (`NamedPoint` carries a name; plain
//! vectors are identified by their position in the input).

use std::sync::Arc;

/// A point with a stable, ordered coordinate vector.
///
/// The returned slice must not change for the lifetime of a clustering call.
pub trait ClusterablePoint {
    /// Coordinates in feature space.
    fn coordinates(&self) -> &[f64];
}

impl ClusterablePoint for Vec<f64> {
    fn coordinates(&self) -> &[f64] {
        self
    }
}

impl ClusterablePoint for [f64] {
    fn coordinates(&self) -> &[f64] {
        self
    }
}

impl<const N: usize> ClusterablePoint for [f64; N] {
    fn coordinates(&self) -> &[f64] {
        self
    }
}

impl<T: ClusterablePoint + ?Sized> ClusterablePoint for &T {
    fn coordinates(&self) -> &[f64] {
        (**self).coordinates()
    }
}

impl<T: ClusterablePoint + ?Sized> ClusterablePoint for Box<T> {
    fn coordinates(&self) -> &[f64] {
        (**self).coordinates()
    }
}

impl<T: ClusterablePoint + ?Sized> ClusterablePoint for Arc<T> {
    fn coordinates(&self) -> &[f64] {
        (**self).coordinates()
    }
}

/// A point tagged with a name, useful for reporting which input ended up where.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedPoint {
    /// Identity of the point.
    pub name: String,
    /// Coordinates in feature space.
    pub point: Vec<f64>,
}

impl NamedPoint {
    /// Create a named point.
    pub fn new(name: impl Into<String>, point: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            point,
        }
    }
}

impl ClusterablePoint for NamedPoint {
    fn coordinates(&self) -> &[f64] {
        &self.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blanket_impls_forward_coordinates() {
        let p = NamedPoint::new("a", vec![1.0, 2.0]);
        assert_eq!((&p).coordinates(), &[1.0, 2.0]);
        assert_eq!(Arc::new(p.clone()).coordinates(), &[1.0, 2.0]);
        assert_eq!(Box::new(p).coordinates(), &[1.0, 2.0]);
        assert_eq!([3.0_f64, 4.0, 5.0].coordinates(), &[3.0, 4.0, 5.0]);
    }
}
