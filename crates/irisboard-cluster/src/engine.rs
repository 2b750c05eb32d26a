//! Thin wrapper around `linfa_clustering::KMeans`.

use crate::settings::KMeansSettings;
use irisboard_common::{IrisboardError, Result};
use linfa::traits::{Fit, Predict};
use linfa::DatasetBase;
use linfa_clustering::KMeans;
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use serde::Serialize;
use tracing::debug;

/// Cluster centre in the two selected attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

/// Result of one k-means fit.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Cluster index per input row, in row order.
    pub labels: Vec<usize>,
    /// One centre per cluster, indexed by label.
    pub centroids: Vec<Centroid>,
    /// Seed the RNG was initialised with.
    pub seed: u64,
}

/// Fit k-means with `n_clusters` centres on an n × 2 feature matrix.
pub fn fit_kmeans(features: Array2<f64>, n_clusters: usize, settings: &KMeansSettings) -> Result<Partition> {
    let seed = settings.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let rng = Xoshiro256Plus::seed_from_u64(seed);
    let dataset = DatasetBase::from(features);

    let model = KMeans::params_with_rng(n_clusters, rng)
        .max_n_iterations(settings.max_iterations)
        .tolerance(settings.tolerance)
        .n_runs(settings.n_runs)
        .fit(&dataset)
        .map_err(|e| IrisboardError::Clustering(e.to_string()))?;

    let centroids: Vec<Centroid> = model
        .centroids()
        .outer_iter()
        .map(|row| Centroid { x: row[0], y: row[1] })
        .collect();

    let DatasetBase { targets, .. } = model.predict(dataset);
    let labels = targets.to_vec();

    debug!(n_clusters, seed, rows = labels.len(), "k-means fitted");
    Ok(Partition { labels, centroids, seed })
}
