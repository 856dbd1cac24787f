//! UI Components for the BrainAI application.
//!
//! # Layout Components
//! - [`PageHeader`] - Brand bar and Home/About navigation
//! - [`ErrorBanner`] - Dismissible error message
//!
//! # Pages
//! - [`LandingView`] - Hero with the "Try Me" call-to-action
//! - [`InfoView`] - Project information
//! - [`ResultView`] - Last prediction
//!
//! # Feature Components
//! - [`UploadWidget`] - MRI upload modal with drag & drop

mod header;
mod hero;
mod about;
mod result;
mod upload;
mod error_banner;

pub use header::*;
pub use hero::*;
pub use about::*;
pub use result::*;
pub use upload::*;
pub use error_banner::*;
