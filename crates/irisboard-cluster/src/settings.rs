use irisboard_common::{IrisboardError, Result};
use serde::{Deserialize, Serialize};

/// Hyperparameters handed to the k-means routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KMeansSettings {
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Number of k-means++ restarts; the run with the lowest inertia wins.
    #[serde(default = "default_n_runs")]
    pub n_runs: usize,
    /// Fixed RNG seed. `None` draws a fresh seed for every run.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_iterations() -> u64 { 300 }
fn default_tolerance()      -> f64 { 1e-4 }
fn default_n_runs()         -> usize { 10 }

impl Default for KMeansSettings {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
            n_runs: default_n_runs(),
            seed: None,
        }
    }
}

impl KMeansSettings {
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(IrisboardError::Config("clustering.max_iterations must be at least 1".into()));
        }
        if !(self.tolerance > 0.0) {
            return Err(IrisboardError::Config("clustering.tolerance must be positive".into()));
        }
        if self.n_runs == 0 {
            return Err(IrisboardError::Config("clustering.n_runs must be at least 1".into()));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(KMeansSettings::default().validate().is_ok());
        assert_eq!(KMeansSettings::default().seed, None);
    }

    #[test]
    fn test_rejects_non_positive_tolerance() {
        let settings = KMeansSettings { tolerance: 0.0, ..Default::default() };
        assert!(matches!(settings.validate(), Err(IrisboardError::Config(_))));
        let settings = KMeansSettings { tolerance: f64::NAN, ..Default::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_runs_and_iterations() {
        assert!(KMeansSettings { n_runs: 0, ..Default::default() }.validate().is_err());
        assert!(KMeansSettings { max_iterations: 0, ..Default::default() }.validate().is_err());
    }
}
