//! Application state holder.
//!
//! `App` keeps one [`AppState`] in a signal; components only read it and
//! report intents upward, every mutation goes through the methods below.

use crate::config::{ACCEPTED_MIME_TYPES, MAX_UPLOAD_BYTES};
use crate::types::{AppError, AppResult, FileInfo, PageId, PredictionResult};

/// Banner text for files with an unsupported MIME type.
pub const UNSUPPORTED_TYPE_MESSAGE: &str = "Please upload a JPG or PNG image";

/// Banner text for files over [`MAX_UPLOAD_BYTES`].
pub const TOO_LARGE_MESSAGE: &str = "Image exceeds the 10 MB upload limit";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub page: PageId,
    pub modal_open: bool,
    /// Most recent prediction; kept when navigating away.
    pub prediction: Option<PredictionResult>,
    pub error: Option<AppError>,
}

impl AppState {
    pub fn request_upload_flow(&mut self) {
        self.modal_open = true;
    }

    pub fn close_upload_flow(&mut self) {
        self.modal_open = false;
        self.error = None;
    }

    pub fn set_page(&mut self, page: PageId) {
        self.page = page;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Banner text, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(AppError::user_message)
    }

    /// Validate a file before submission.
    ///
    /// Returns `true` when the request may be sent. On rejection the
    /// error is recorded and nothing else changes.
    pub fn admit_upload(&mut self, file: &FileInfo) -> bool {
        match validate_upload(file) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("🚫 Rejected {}: {}", file.name, e);
                self.error = Some(e);
                false
            }
        }
    }

    /// Apply the outcome of a prediction request.
    ///
    /// Responses are applied whenever they arrive, so the latest one wins.
    pub fn apply_prediction(&mut self, outcome: AppResult<PredictionResult>) {
        match outcome {
            Ok(prediction) => {
                self.prediction = Some(prediction);
                self.close_upload_flow();
                self.page = PageId::Result;
            }
            Err(e) => {
                log::error!("❌ Prediction failed: {}", e);
                self.error = Some(e);
            }
        }
    }
}

/// Check MIME type and size of a selected file.
pub fn validate_upload(file: &FileInfo) -> AppResult<()> {
    if !ACCEPTED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(AppError::Validation(UNSUPPORTED_TYPE_MESSAGE.to_string()));
    }
    if file.size_bytes > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(TOO_LARGE_MESSAGE.to_string()));
    }
    Ok(())
}
