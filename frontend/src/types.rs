//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Navigation Types** - which page is visible
//! - **Upload Types** - the file handed over by the upload widget
//! - **API Types** - prediction service response structures
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;
use web_sys::File;

// =============================================================================
// Navigation Types
// =============================================================================

/// Page currently rendered below the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageId {
    /// Landing page with the call-to-action
    #[default]
    Home,
    /// Static project information
    About,
    /// Last prediction
    Result,
}

impl PageId {
    /// Pages reachable from the header navigation.
    pub const NAVIGABLE: [PageId; 2] = [PageId::Home, PageId::About];

    /// Get button label for display.
    pub fn label(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About",
            PageId::Result => "Result",
        }
    }

    /// Get emoji prefix for display.
    pub fn icon(&self) -> &'static str {
        match self {
            PageId::Home => "🏠",
            PageId::About => "ℹ️",
            PageId::Result => "📊",
        }
    }
}

// =============================================================================
// Upload Types
// =============================================================================

/// Metadata of a selected file, as declared by the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct FileInfo {
    /// Original file name
    pub name: String,
    /// Declared MIME type (may be empty)
    pub mime_type: String,
    /// Size in bytes
    pub size_bytes: u64,
}

/// A file picked or dropped by the user.
///
/// Owned by value: the upload flow moves it into the request and drops it
/// once the response is applied.
#[derive(Clone, Debug)]
pub struct UploadedFile {
    blob: File,
    info: FileInfo,
}

impl UploadedFile {
    pub fn new(blob: File) -> Self {
        let info = FileInfo {
            name: blob.name(),
            mime_type: blob.type_(),
            size_bytes: blob.size() as u64,
        };
        Self { blob, info }
    }

    pub fn blob(&self) -> &File {
        &self.blob
    }

    pub fn info(&self) -> &FileInfo {
        &self.info
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Successful response of the prediction endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted class label, e.g. "Glioma Tumor"
    #[serde(rename = "class")]
    pub class_name: String,
    /// Confidence in percent
    #[serde(rename = "confidence")]
    pub confidence_percent: f64,
    /// Identifier of the stored scan, when the service keeps one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_id: Option<String>,
}

impl PredictionResult {
    /// Confidence line shown on the result page.
    pub fn confidence_label(&self) -> String {
        format!("Confidence: {}%", self.confidence_percent)
    }

    /// Whether the model found no tumor.
    pub fn is_tumor_free(&self) -> bool {
        self.class_name.trim().eq_ignore_ascii_case("no tumor")
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Banner text for rejected service responses without an `error` field.
pub const SERVICE_FALLBACK_MESSAGE: &str = "Invalid MRI scan";

/// Banner text for any transport-level failure.
pub const TRANSPORT_MESSAGE: &str = "Failed to connect to AI server";

/// Frontend application errors.
///
/// Every variant ends up in the dismissible error banner.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// File rejected before any network call.
    Validation(String),
    /// Prediction service answered with a failure status.
    Service { status: u16, message: Option<String> },
    /// Service unreachable or response unusable.
    Transport(String),
}

impl AppError {
    /// Text shown to the user.
    ///
    /// Transport details stay in the console log.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Service { message, .. } => message
                .clone()
                .unwrap_or_else(|| SERVICE_FALLBACK_MESSAGE.to_string()),
            AppError::Transport(_) => TRANSPORT_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Service { status, message } => write!(
                f,
                "Service error ({}): {}",
                status,
                message.as_deref().unwrap_or(SERVICE_FALLBACK_MESSAGE)
            ),
            AppError::Transport(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_deserialization() {
        let json = r#"{"scan_id": "66f1c0ffee", "class": "Meningioma Tumor", "confidence": 88.42}"#;

        let prediction: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(prediction.class_name, "Meningioma Tumor");
        assert_eq!(prediction.confidence_percent, 88.42);
        assert_eq!(prediction.scan_id.as_deref(), Some("66f1c0ffee"));
    }

    #[test]
    fn test_prediction_without_scan_id() {
        let prediction: PredictionResult =
            serde_json::from_str(r#"{"class": "Glioma", "confidence": 97.5}"#).unwrap();
        assert_eq!(prediction.scan_id, None);
        assert_eq!(prediction.confidence_label(), "Confidence: 97.5%");
    }

    #[test]
    fn test_tumor_free() {
        let healthy = PredictionResult {
            class_name: "No Tumor".to_string(),
            confidence_percent: 99.0,
            scan_id: None,
        };
        let glioma = PredictionResult {
            class_name: "Glioma Tumor".to_string(),
            ..healthy.clone()
        };
        assert!(healthy.is_tumor_free());
        assert!(!glioma.is_tumor_free());
    }

    #[test]
    fn test_user_messages() {
        let service = AppError::Service { status: 400, message: None };
        assert_eq!(service.user_message(), SERVICE_FALLBACK_MESSAGE);

        let transport = AppError::Transport("connection refused".to_string());
        assert_eq!(transport.user_message(), TRANSPORT_MESSAGE);
        assert_eq!(transport.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_default_page() {
        assert_eq!(PageId::default(), PageId::Home);
        assert!(!PageId::NAVIGABLE.contains(&PageId::Result));
    }
}
