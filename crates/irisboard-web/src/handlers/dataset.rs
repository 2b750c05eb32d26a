//! Read-only views of the base dataset and the attribute vocabulary.

use axum::{extract::State, Json};
use serde::Serialize;
use irisboard_data::{Attribute, SampleRecord};
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct ApiAttributes {
    pub attributes: Vec<&'static str>,
    pub default_x: Attribute,
    pub default_y: Attribute,
    pub default_clusters: i64,
    pub page_size: usize,
}

/// GET /api/attributes - Selectable axes and the initial widget values
pub async fn api_attributes(State(state): State<SharedState>) -> Json<ApiAttributes> {
    let ui = &state.config.ui;
    Json(ApiAttributes {
        attributes: Attribute::ALL.iter().map(|a| a.label()).collect(),
        default_x: ui.default_x,
        default_y: ui.default_y,
        default_clusters: ui.default_clusters,
        page_size: ui.page_size,
    })
}

/// GET /api/dataset - The unclustered base dataset
pub async fn api_dataset(State(state): State<SharedState>) -> Json<Vec<SampleRecord>> {
    Json(state.dataset.records().to_vec())
}
