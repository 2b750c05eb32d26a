//! Tabular output: every dataset column plus the cluster label.

use irisboard_data::{Attribute, SampleRecord, SPECIES_COLUMN, SPECIES_ID_COLUMN};
use serde::Serialize;

pub const CLUSTER_COLUMN: &str = "Cluster";
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A sample record augmented with its cluster label for the current run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusteredRecord {
    #[serde(flatten)]
    pub record: SampleRecord,
    #[serde(rename = "Cluster")]
    pub cluster: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<ClusteredRecord>,
    pub page_size: usize,
}

impl Table {
    pub fn new(rows: Vec<ClusteredRecord>, page_size: usize) -> Self {
        Self {
            columns: Self::column_names(),
            rows,
            page_size: page_size.max(1),
        }
    }

    /// Column headers in display order.
    pub fn column_names() -> Vec<String> {
        Attribute::ALL
            .iter()
            .map(|a| a.label())
            .chain([SPECIES_COLUMN, SPECIES_ID_COLUMN, CLUSTER_COLUMN])
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size)
    }

    /// Rows of the zero-based page `index`; empty past the last page.
    pub fn page(&self, index: usize) -> &[ClusteredRecord] {
        let start = index.saturating_mul(self.page_size).min(self.rows.len());
        let end = start.saturating_add(self.page_size).min(self.rows.len());
        &self.rows[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows(n: usize) -> Vec<ClusteredRecord> {
        (0..n)
            .map(|i| ClusteredRecord {
                record: SampleRecord {
                    sepal_length: i as f64,
                    sepal_width: 1.0,
                    petal_length: 2.0,
                    petal_width: 3.0,
                    species: "setosa".to_string(),
                    species_id: 1,
                },
                cluster: (i % 3).to_string(),
            })
            .collect()
    }

    #[test]
    fn test_pages_of_ten() {
        let table = Table::new(rows(25), DEFAULT_PAGE_SIZE);
        assert_eq!(table.page_count(), 3);
        assert_eq!(table.page(0).len(), 10);
        assert_eq!(table.page(2).len(), 5);
        assert_eq!(table.page(2)[0].record.sepal_length, 20.0);
        assert!(table.page(3).is_empty());
        assert!(table.page(usize::MAX).is_empty());
    }

    #[test]
    fn test_zero_page_size_is_raised_to_one() {
        let table = Table::new(rows(3), 0);
        assert_eq!(table.page_size, 1);
        assert_eq!(table.page_count(), 3);
    }

    #[test]
    fn test_columns_end_with_cluster() {
        assert_eq!(Table::column_names(), vec![
            "Sepal length (cm)", "Sepal width (cm)", "Petal length (cm)", "Petal width (cm)",
            "Species", "Species ID", "Cluster",
        ]);
    }

    #[test]
    fn test_row_serialises_flat() {
        let row = &rows(1)[0];
        let value = serde_json::to_value(row).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 7);
        assert_eq!(value["Cluster"], "0");
        assert_eq!(value["Species ID"], 1);
    }
}
