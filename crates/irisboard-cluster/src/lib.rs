//! irisboard-cluster — K-means over two selected iris attributes.
//!
//! [`run_clustering`] is the whole reactive step: clamp the cluster count,
//! copy the base dataset, fit k-means on the chosen columns, label every
//! row and build the chart and table that the dashboard renders.

pub mod chart;
pub mod engine;
pub mod handler;
pub mod settings;
pub mod table;

pub use chart::ChartSpec;
pub use engine::{Centroid, Partition};
pub use handler::{effective_cluster_count, run_clustering, ClusterOutcome, ClusterRequest};
pub use settings::KMeansSettings;
pub use table::{ClusteredRecord, Table, CLUSTER_COLUMN};
