//! The reactive step behind the dashboard's Apply button.

use crate::chart::ChartSpec;
use crate::engine::{fit_kmeans, Centroid};
use crate::settings::KMeansSettings;
use crate::table::{ClusteredRecord, Table};
use irisboard_common::{IrisboardError, Result};
use irisboard_data::{Attribute, Dataset, SampleRecord};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, warn};

/// Current widget values. The trigger itself carries nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterRequest {
    pub x_attribute: Attribute,
    pub y_attribute: Attribute,
    #[serde(default)]
    pub cluster_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClusterOutcome {
    pub x_attribute: Attribute,
    pub y_attribute: Attribute,
    pub effective_cluster_count: usize,
    pub seed: u64,
    pub centroids: Vec<Centroid>,
    pub chart: ChartSpec,
    pub table: Table,
}

/// At least one cluster; a missing count counts as non-positive.
pub fn effective_cluster_count(requested: Option<i64>) -> usize {
    match requested {
        Some(n) if n > 1 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => 1,
    }
}

/// Cluster `dataset` on the two requested attributes.
///
/// The dataset is never mutated: rows are copied before the label column is
/// attached. Chart and table are built from the same partition.
pub fn run_clustering(
    dataset: &Dataset,
    request: &ClusterRequest,
    settings: &KMeansSettings,
    page_size: usize,
) -> Result<ClusterOutcome> {
    let started = Instant::now();
    let (x, y) = (request.x_attribute, request.y_attribute);
    let k = effective_cluster_count(request.cluster_count);

    if k > dataset.len() {
        return Err(IrisboardError::TooManyClusters { requested: k, available: dataset.len() });
    }
    let distinct = dataset.distinct_points(x, y);
    if k > distinct {
        warn!(requested = k, distinct, "More clusters than distinct points; some clusters will be empty or duplicated");
    }

    let records: Vec<SampleRecord> = dataset.records().to_vec();
    let partition = fit_kmeans(dataset.features(x, y), k, settings)?;

    let chart = ChartSpec::scatter(x, y, &records, &partition.labels, &partition.centroids);
    let rows: Vec<ClusteredRecord> = records
        .into_iter()
        .zip(&partition.labels)
        .map(|(record, label)| ClusteredRecord { record, cluster: label.to_string() })
        .collect();

    info!(
        x = %x, y = %y,
        requested = ?request.cluster_count,
        effective = k,
        seed = partition.seed,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Clustering run complete"
    );

    Ok(ClusterOutcome {
        x_attribute: x,
        y_attribute: y,
        effective_cluster_count: k,
        seed: partition.seed,
        centroids: partition.centroids,
        chart,
        table: Table::new(rows, page_size),
    })
}
