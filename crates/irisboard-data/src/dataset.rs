//! Dataset provider — parses the bundled CSV and renames its columns.

use crate::attribute::Attribute;
use irisboard_common::Result;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::sync::OnceLock;
use tracing::debug;

pub const SPECIES_COLUMN: &str = "Species";
pub const SPECIES_ID_COLUMN: &str = "Species ID";

const IRIS_CSV: &str = include_str!("../data/iris.csv");

/// Row layout of the bundled CSV, before renaming.
#[derive(Debug, Deserialize)]
struct RawRow {
    sepal_length: f64,
    sepal_width: f64,
    petal_length: f64,
    petal_width: f64,
    species: String,
    species_id: u8,
}

/// One flower. Serialises with the human-readable column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    #[serde(rename = "Sepal length (cm)")]
    pub sepal_length: f64,
    #[serde(rename = "Sepal width (cm)")]
    pub sepal_width: f64,
    #[serde(rename = "Petal length (cm)")]
    pub petal_length: f64,
    #[serde(rename = "Petal width (cm)")]
    pub petal_width: f64,
    #[serde(rename = "Species")]
    pub species: String,
    #[serde(rename = "Species ID")]
    pub species_id: u8,
}

impl SampleRecord {
    pub fn value(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::SepalLength => self.sepal_length,
            Attribute::SepalWidth  => self.sepal_width,
            Attribute::PetalLength => self.petal_length,
            Attribute::PetalWidth  => self.petal_width,
        }
    }
}

impl From<RawRow> for SampleRecord {
    fn from(raw: RawRow) -> Self {
        Self {
            sepal_length: raw.sepal_length,
            sepal_width: raw.sepal_width,
            petal_length: raw.petal_length,
            petal_width: raw.petal_width,
            species: raw.species,
            species_id: raw.species_id,
        }
    }
}

/// Immutable table of sample records.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<SampleRecord>,
}

impl Dataset {
    /// The bundled iris dataset, parsed on first call and shared afterwards.
    pub fn iris() -> Result<&'static Dataset> {
        static IRIS: OnceLock<Dataset> = OnceLock::new();

        if let Some(dataset) = IRIS.get() {
            return Ok(dataset);
        }
        let parsed = Dataset::parse(IRIS_CSV.as_bytes())?;
        debug!(rows = parsed.len(), "Loaded bundled iris dataset");
        Ok(IRIS.get_or_init(|| parsed))
    }

    /// Parse a CSV with the `sepal_length,...,species,species_id` header.
    pub fn parse<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let records = csv_reader
            .deserialize::<RawRow>()
            .map(|row| row.map(SampleRecord::from))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SampleRecord] {
        &self.records
    }

    pub fn column(&self, attribute: Attribute) -> Vec<f64> {
        self.records.iter().map(|r| r.value(attribute)).collect()
    }

    /// n × 2 feature matrix of the two selected columns, in row order.
    pub fn features(&self, x: Attribute, y: Attribute) -> Array2<f64> {
        Array2::from_shape_fn((self.records.len(), 2), |(row, col)| {
            let attribute = if col == 0 { x } else { y };
            self.records[row].value(attribute)
        })
    }

    /// Number of distinct `(x, y)` points in the selected feature space.
    pub fn distinct_points(&self, x: Attribute, y: Attribute) -> usize {
        self.records
            .iter()
            .map(|r| (r.value(x).to_bits(), r.value(y).to_bits()))
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }

    #[test]
    fn test_bundled_dataset_has_150_rows() {
        let iris = Dataset::iris().unwrap();
        assert_eq!(iris.len(), 150);
        for (species, id) in [("setosa", 1), ("versicolor", 2), ("virginica", 3)] {
            let count = iris.records().iter()
                .filter(|r| r.species == species && r.species_id == id)
                .count();
            assert_eq!(count, 50, "{species} should have 50 rows");
        }
    }

    #[test]
    fn test_iris_is_loaded_once() {
        let first = Dataset::iris().unwrap();
        let second = Dataset::iris().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_column_means_match_reference_values() {
        let iris = Dataset::iris().unwrap();
        let expected = [5.843333, 3.057333, 3.758, 1.199333];
        for (attr, want) in Attribute::ALL.into_iter().zip(expected) {
            let got = mean(&iris.column(attr));
            assert!((got - want).abs() < 1e-5, "{attr}: {got} != {want}");
        }
    }

    #[test]
    fn test_records_serialise_with_renamed_columns() {
        let iris = Dataset::iris().unwrap();
        let value = serde_json::to_value(&iris.records()[0]).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![
            "Petal length (cm)", "Petal width (cm)",
            "Sepal length (cm)", "Sepal width (cm)",
            "Species", "Species ID",
        ]);
        assert_eq!(value["Sepal length (cm)"], 5.1);
        assert_eq!(value["Species"], "setosa");
    }

    #[test]
    fn test_features_selects_requested_columns() {
        let iris = Dataset::iris().unwrap();
        let features = iris.features(Attribute::PetalLength, Attribute::SepalWidth);
        assert_eq!(features.shape(), &[150, 2]);
        assert_eq!(features[[0, 0]], 1.4);
        assert_eq!(features[[0, 1]], 3.5);
        assert_eq!(features[[149, 0]], 5.1);
        assert_eq!(features[[149, 1]], 3.0);
    }

    #[test]
    fn test_distinct_points() {
        let iris = Dataset::iris().unwrap();
        assert_eq!(iris.distinct_points(Attribute::SepalLength, Attribute::SepalWidth), 117);
        assert_eq!(iris.distinct_points(Attribute::PetalLength, Attribute::PetalWidth), 102);
        // Same column on both axes collapses to the distinct values of that column.
        assert_eq!(iris.distinct_points(Attribute::SepalLength, Attribute::SepalLength), 35);
    }

    #[test]
    fn test_parse_rejects_malformed_rows() {
        let csv = "sepal_length,sepal_width,petal_length,petal_width,species,species_id\n\
                   5.1,not-a-number,1.4,0.2,setosa,1\n";
        assert!(Dataset::parse(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_custom_csv() {
        let csv = "sepal_length,sepal_width,petal_length,petal_width,species,species_id\n\
                   1.0,2.0,3.0,4.0,setosa,1\n\
                   5.0,6.0,7.0,8.0,virginica,3\n";
        let dataset = Dataset::parse(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.column(Attribute::PetalWidth), vec![4.0, 8.0]);
        assert_eq!(dataset.records()[1].species, "virginica");
    }
}
