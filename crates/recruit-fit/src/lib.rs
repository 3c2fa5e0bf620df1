//! Fit scoring and portfolio health evaluation for athlete recruiting.
//!
//! The [`scoring`] module turns athlete and school attributes into bounded dimension
//! scores, a 0-100 fit score and a tier. The [`portfolio`] module rolls tiered schools up
//! into an advisory health report.

pub mod config;
pub mod error;
pub mod portfolio;
pub mod scoring;
pub mod telemetry;
