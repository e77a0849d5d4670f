use super::point::ClusterablePoint;
use crate::error::Result;

/// Common interface for algorithms that partition points into clusters and noise.
pub trait Clusterer {
    /// Cluster `points`, returning each cluster as input positions.
    ///
    /// Points left out of every cluster are noise.
    fn cluster_indices<P>(&self, points: &[P]) -> Result<Vec<Vec<usize>>>
    where
        P: ClusterablePoint + Sync;

    /// Cluster `points`, returning each cluster as references into the input.
    fn cluster<'a, P>(&self, points: &'a [P]) -> Result<Vec<Vec<&'a P>>>
    where
        P: ClusterablePoint + Sync,
    {
        Ok(self
            .cluster_indices(points)?
            .into_iter()
            .map(|members| members.into_iter().map(|i| &points[i]).collect())
            .collect())
    }

    /// One label per input point: the cluster's index in the output of
    /// [`cluster_indices`](Self::cluster_indices), or `None` for noise.
    fn fit_predict_with_noise<P>(&self, points: &[P]) -> Result<Vec<Option<usize>>>
    where
        P: ClusterablePoint + Sync,
    {
        let mut labels = vec![None; points.len()];
        for (label, members) in self.cluster_indices(points)?.into_iter().enumerate() {
            for i in members {
                labels[i] = Some(label);
            }
        }
        Ok(labels)
    }
}
