//! The four measurement columns a user can put on an axis.

use irisboard_common::IrisboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "Sepal length (cm)")]
    SepalLength,
    #[serde(rename = "Sepal width (cm)")]
    SepalWidth,
    #[serde(rename = "Petal length (cm)")]
    PetalLength,
    #[serde(rename = "Petal width (cm)")]
    PetalWidth,
}

impl Attribute {
    /// Canonical column order, as shown in dropdowns and the table.
    pub const ALL: [Attribute; 4] = [
        Attribute::SepalLength,
        Attribute::SepalWidth,
        Attribute::PetalLength,
        Attribute::PetalWidth,
    ];

    /// Human-readable column name. Also the wire name used by the API.
    pub fn label(self) -> &'static str {
        match self {
            Attribute::SepalLength => "Sepal length (cm)",
            Attribute::SepalWidth  => "Sepal width (cm)",
            Attribute::PetalLength => "Petal length (cm)",
            Attribute::PetalWidth  => "Petal width (cm)",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Attribute {
    type Err = IrisboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.label() == s)
            .ok_or_else(|| IrisboardError::UnknownAttribute(s.to_string()))
    }
}
