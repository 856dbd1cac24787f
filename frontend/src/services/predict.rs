//! HTTP service for submitting MRI scans to the prediction endpoint.

use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::config::UPLOAD_FIELD;
use crate::types::{AppError, AppResult, PredictionResult, UploadedFile};

/// Upload an image and return the service's classification.
///
/// Single attempt, browser default timeout.
pub async fn predict(file: &UploadedFile, endpoint: &str) -> AppResult<PredictionResult> {
    let form_data = FormData::new().map_err(js_error)?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file.blob(), &file.info().name)
        .map_err(js_error)?;

    log::info!("📤 Uploading {} to {}", file.info().name, endpoint);

    let request = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| AppError::Transport(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Transport(format!("Failed to read response: {}", e)))?;

    interpret_response(status, &body)
}

/// Turn a raw status and body into a prediction or an error.
///
/// The body must be JSON whatever the status; anything else counts as a
/// transport failure.
pub fn interpret_response(status: u16, body: &str) -> AppResult<PredictionResult> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| AppError::Transport(format!("Malformed response ({}): {}", status, e)))?;

    if (200..300).contains(&status) {
        let prediction: PredictionResult = serde_json::from_value(payload)
            .map_err(|e| AppError::Transport(format!("Unexpected prediction payload: {}", e)))?;
        log::info!(
            "✅ Prediction: {} ({}%)",
            prediction.class_name,
            prediction.confidence_percent
        );
        return Ok(prediction);
    }

    let message = payload
        .get("error")
        .and_then(Value::as_str)
        .filter(|msg| !msg.is_empty())
        .map(str::to_string);

    Err(AppError::Service { status, message })
}

fn js_error(err: JsValue) -> AppError {
    AppError::Transport(format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SERVICE_FALLBACK_MESSAGE, TRANSPORT_MESSAGE};

    #[test]
    fn test_success_response() {
        let json = r#"{
            "scan_id": "6702b1f4e13c2a9d8f0e4b11",
            "class": "Pituitary Tumor",
            "confidence": 93.17
        }"#;

        let prediction = interpret_response(200, json).unwrap();
        assert_eq!(prediction.class_name, "Pituitary Tumor");
        assert_eq!(prediction.confidence_percent, 93.17);
        assert_eq!(prediction.scan_id.as_deref(), Some("6702b1f4e13c2a9d8f0e4b11"));
    }

    #[test]
    fn test_error_field_is_surfaced() {
        let err = interpret_response(400, r#"{"error": "Image too small for MRI"}"#).unwrap_err();
        assert_eq!(
            err,
            AppError::Service {
                status: 400,
                message: Some("Image too small for MRI".to_string()),
            }
        );
        assert_eq!(err.user_message(), "Image too small for MRI");
    }

    #[test]
    fn test_missing_error_field_uses_fallback() {
        for body in [r#"{}"#, r#"{"error": ""}"#, r#"{"error": 42}"#] {
            let err = interpret_response(500, body).unwrap_err();
            assert_eq!(err.user_message(), SERVICE_FALLBACK_MESSAGE);
        }
    }

    #[test]
    fn test_non_json_body_is_transport_error() {
        let html = "<!doctype html><title>413 Request Entity Too Large</title>";
        let err = interpret_response(413, html).unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
        assert_eq!(err.user_message(), TRANSPORT_MESSAGE);

        let err = interpret_response(200, "").unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
    }

    #[test]
    fn test_incomplete_success_payload_is_transport_error() {
        let err = interpret_response(200, r#"{"class": "Glioma"}"#).unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
    }
}
