//! Shared application state for the web server.

use std::sync::Arc;
use irisboard_data::Dataset;
use crate::config::Config;

/// Shared state injected into every Axum handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process-wide read-only dataset; runs clone it before labelling.
    pub dataset: &'static Dataset,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let dataset = Dataset::iris()?;
        Ok(Self { dataset, config })
    }
}

pub type SharedState = Arc<AppState>;
