//! Liveness probe.

use axum::{extract::State, Json};
use serde::Serialize;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub rows: usize,
    pub version: &'static str,
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        rows: state.dataset.len(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
