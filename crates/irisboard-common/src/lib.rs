//! irisboard-common — Shared error types used across all Irisboard crates.

pub mod error;

pub use error::{ApiError, IrisboardError, Result};
