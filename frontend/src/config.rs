//! Application configuration.
//!
//! Centralized configuration for the BrainAI frontend.
//! These are hardcoded; the prediction service runs next to the
//! browser during the demo.

/// Prediction service base URL.
pub const PREDICTION_SERVICE_URL: &str = "http://127.0.0.1:5000";

/// Path of the classification endpoint on the prediction service.
pub const PREDICT_PATH: &str = "/predict";

/// Multipart field name the prediction service reads the image from.
pub const UPLOAD_FIELD: &str = "file";

/// MIME types accepted for upload.
pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Extension filter for the file picker.
///
/// Advisory only, the MIME check in [`crate::state`] is what rejects files.
pub const ACCEPT_FILTER: &str = ".jpg,.jpeg,.png";

/// Maximum upload size (in bytes).
///
/// 10 MB, same limit the prediction service enforces.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Document title.
pub const APP_TITLE: &str = "BrainAI - MRI Tumor Detection";

/// Diagnoses the model distinguishes, as displayed on the About page.
pub const DIAGNOSES: [&str; 4] = [
    "Glioma Tumor",
    "Meningioma Tumor",
    "Pituitary Tumor",
    "No Tumor (Healthy)",
];

/// Full URL of the classification endpoint.
pub fn predict_endpoint() -> String {
    format!("{}{}", PREDICTION_SERVICE_URL, PREDICT_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_endpoint() {
        assert_eq!(predict_endpoint(), "http://127.0.0.1:5000/predict");
    }
}
