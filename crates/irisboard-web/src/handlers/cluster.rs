//! Clustering endpoint — the request/response form of the Apply trigger.

use axum::{extract::State, Json};
use irisboard_cluster::{run_clustering, ClusterOutcome, ClusterRequest};
use irisboard_common::ApiError;
use crate::state::SharedState;

/// POST /api/cluster - Re-run k-means with the current widget values
pub async fn api_cluster(
    State(state): State<SharedState>,
    Json(request): Json<ClusterRequest>,
) -> Result<Json<ClusterOutcome>, ApiError> {
    // k-means is CPU-bound; keep it off the async workers.
    let outcome = tokio::task::spawn_blocking(move || {
        run_clustering(
            state.dataset,
            &request,
            &state.config.clustering,
            state.config.ui.page_size,
        )
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Clustering task failed: {e}")))??;

    Ok(Json(outcome))
}
