//! irisboard-web — Web GUI for iris k-means clustering.
//! Serves a single dashboard page plus the JSON API it talks to:
//!   - attribute pickers, cluster count and an Apply trigger
//!   - scatter chart with centroid overlay (Chart.js)
//!   - paginated table of the clustered records

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
