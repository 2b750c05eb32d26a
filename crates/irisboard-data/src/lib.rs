//! irisboard-data — The bundled iris flower dataset.
//!
//! The CSV ships inside the binary and is parsed once, on first access,
//! into an immutable [`Dataset`] whose columns carry human-readable names.

pub mod attribute;
pub mod dataset;

pub use attribute::Attribute;
pub use dataset::{Dataset, SampleRecord, SPECIES_COLUMN, SPECIES_ID_COLUMN};
