//! Prediction service communication.
//!
//! # Services
//!
//! - [`predict`] - MRI scan upload to the classification endpoint

pub mod predict;

pub use predict::*;
