//! HTTP handlers for all web routes.

pub mod cluster;
pub mod dashboard;
pub mod dataset;
pub mod system;
