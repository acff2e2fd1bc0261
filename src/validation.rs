//! Input validation for PlantAssist
//! Size caps and format checks applied before any prompt or lookup runs

use base64::engine::general_purpose;
use base64::Engine as _;
use thiserror::Error;

/// Maximum size for a plant-name query
pub const MAX_PLANT_NAME_BYTES: usize = 200;

/// Maximum size for raw model text handed to the normalizer (64KB)
pub const MAX_RESPONSE_TEXT_BYTES: usize = 64 * 1024;

/// Maximum size for a base64 image payload (10MB)
pub const MAX_IMAGE_PAYLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Input exceeds size limit: {size} bytes (max: {max} bytes)")]
    InputTooLarge { size: usize, max: usize },
    #[error("Invalid input format: {0}")]
    InvalidFormat(String),
    #[error("Empty input not allowed")]
    EmptyInput,
}

/// Validate non-empty input
pub fn validate_non_empty(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(())
}

/// Validate text input size
pub fn validate_text_size(text: &str, max_bytes: usize) -> Result<(), ValidationError> {
    let size = text.len();
    if size > max_bytes {
        return Err(ValidationError::InputTooLarge { size, max: max_bytes });
    }
    Ok(())
}

/// Validate an image MIME type (the subset the identification path accepts)
pub fn validate_image_type(mime: &str) -> Result<(), ValidationError> {
    let re = regex_lite::Regex::new(r"^image/(jpeg|png|webp|gif|heic)$").unwrap();
    if !re.is_match(mime) {
        return Err(ValidationError::InvalidFormat(format!(
            "Unsupported image type: {mime}"
        )));
    }
    Ok(())
}

/// Validate a base64 image payload: size cap first, then a decode check so
/// garbage never reaches the upstream API.
pub fn validate_image_payload(data: &str) -> Result<(), ValidationError> {
    validate_non_empty(data)?;
    validate_text_size(data, MAX_IMAGE_PAYLOAD_BYTES)?;
    general_purpose::STANDARD
        .decode(data)
        .map_err(|e| ValidationError::InvalidFormat(format!("Image data is not valid base64: {e}")))?;
    Ok(())
}

/// Validate a custom garden area in square feet
pub fn validate_custom_area(area_sqft: f64) -> Result<(), ValidationError> {
    if !area_sqft.is_finite() || area_sqft <= 0.0 {
        return Err(ValidationError::InvalidFormat(
            "Custom area must be a positive number of square feet".into(),
        ));
    }
    Ok(())
}
