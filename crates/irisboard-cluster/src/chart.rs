//! Scatter chart specification, serialised as a Chart.js config.
//!
//! The server only decides *what* is drawn (series, order, colours); the
//! browser hands the JSON to Chart.js, which does the rendering.

use crate::engine::Centroid;
use irisboard_data::{Attribute, SampleRecord};
use serde::Serialize;

pub const CENTROID_LABEL: &str = "Centroids";

/// Plotly's default qualitative palette, so colours match what users of
/// the classic iris demos expect.
const PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A",
    "#19d3f3", "#FF6692", "#B6E880", "#FF97FF", "#FECB52",
];

pub fn cluster_colour(cluster: usize) -> &'static str {
    PALETTE[cluster % PALETTE.len()]
}

/// Legend order for `n` clusters: "0", "1", ..., "n-1" (numeric, not lexical).
pub fn cluster_order(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<Point>,
    pub background_color: String,
    pub border_color: String,
    pub point_radius: u32,
    pub point_style: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub animation: bool,
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartSpec {
    /// One series per cluster in numeric order, then the centroid overlay.
    ///
    /// `labels[i]` is the cluster of `records[i]`. Every cluster below
    /// `centroids.len()` gets a series, even if empty, so colours stay tied
    /// to cluster numbers.
    pub fn scatter(
        x: Attribute,
        y: Attribute,
        records: &[SampleRecord],
        labels: &[usize],
        centroids: &[Centroid],
    ) -> Self {
        let mut buckets: Vec<Vec<Point>> = vec![Vec::new(); centroids.len()];
        for (record, &label) in records.iter().zip(labels) {
            if let Some(bucket) = buckets.get_mut(label) {
                bucket.push(Point { x: record.value(x), y: record.value(y) });
            }
        }

        let mut datasets: Vec<ChartDataset> = cluster_order(centroids.len())
            .into_iter()
            .zip(buckets)
            .enumerate()
            .map(|(cluster, (label, data))| ChartDataset {
                label,
                data,
                background_color: cluster_colour(cluster).to_string(),
                border_color: cluster_colour(cluster).to_string(),
                point_radius: 4,
                point_style: "circle",
            })
            .collect();

        datasets.push(ChartDataset {
            label: CENTROID_LABEL.to_string(),
            data: centroids.iter().map(|c| Point { x: c.x, y: c.y }).collect(),
            background_color: "#000000".to_string(),
            border_color: "#000000".to_string(),
            point_radius: 10,
            point_style: "triangle",
        });

        Self {
            kind: "scatter",
            data: ChartData { datasets },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                animation: false,
                scales: Scales {
                    x: Axis { title: AxisTitle { display: true, text: x.label().to_string() } },
                    y: Axis { title: AxisTitle { display: true, text: y.label().to_string() } },
                },
            },
        }
    }

    /// Series labels in legend order.
    pub fn legend(&self) -> Vec<&str> {
        self.data.datasets.iter().map(|d| d.label.as_str()).collect()
    }

    pub fn centroid_series(&self) -> Option<&ChartDataset> {
        self.data.datasets.iter().find(|d| d.label == CENTROID_LABEL)
    }
}
