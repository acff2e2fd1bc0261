//! Application error types for PlantAssist
//!
//! Provides a unified error model across all API handlers with:
//! - Stable error codes for frontend handling
//! - User-friendly messages
//! - Optional internal details for logging
//! - Retry hints for UI

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gemini::GeminiError;
use crate::normalize::NormalizeError;
use crate::validation::ValidationError;

/// Error categories for grouping and UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Input validation errors (bad queries, invalid payloads)
    Validation,
    /// Network errors (connection, timeout, rate limits)
    Network,
    /// Generative-model errors (unavailable, unusable output)
    Model,
    /// Resource not found
    NotFound,
    /// Internal errors (unexpected state, bugs)
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Network => write!(f, "network"),
            Self::Model => write!(f, "model"),
            Self::NotFound => write!(f, "not_found"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// Stable error codes for frontend handling
/// Format: CATEGORY_SPECIFIC_ERROR
pub struct ErrorCode;

impl ErrorCode {
    // Validation errors
    pub const VALIDATION_EMPTY_INPUT: &'static str = "VALIDATION_EMPTY_INPUT";
    pub const VALIDATION_INPUT_TOO_LARGE: &'static str = "VALIDATION_INPUT_TOO_LARGE";
    pub const VALIDATION_INVALID_FORMAT: &'static str = "VALIDATION_INVALID_FORMAT";

    // Network errors
    pub const NETWORK_CONNECTION_FAILED: &'static str = "NETWORK_CONNECTION_FAILED";
    pub const NETWORK_TIMEOUT: &'static str = "NETWORK_TIMEOUT";
    pub const NETWORK_RATE_LIMITED: &'static str = "NETWORK_RATE_LIMITED";

    // Model errors
    pub const MODEL_UNAVAILABLE: &'static str = "MODEL_UNAVAILABLE";
    pub const MODEL_AUTH_FAILED: &'static str = "MODEL_AUTH_FAILED";
    pub const MODEL_GENERATION_FAILED: &'static str = "MODEL_GENERATION_FAILED";
    pub const MODEL_EMPTY_RESPONSE: &'static str = "MODEL_EMPTY_RESPONSE";
    pub const MODEL_MALFORMED_RESPONSE: &'static str = "MODEL_MALFORMED_RESPONSE";
    pub const MODEL_SCHEMA_MISMATCH: &'static str = "MODEL_SCHEMA_MISMATCH";

    // Not found errors
    pub const NOT_FOUND_PLANT: &'static str = "NOT_FOUND_PLANT";

    // Internal errors
    pub const INTERNAL_ERROR: &'static str = "INTERNAL_ERROR";
}

/// Application error type for all API handlers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppError {
    /// Stable error code for frontend handling
    pub code: String,
    /// User-friendly error message
    pub message: String,
    /// Optional internal details for logging (not shown to user)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Whether the operation can be retried
    pub retryable: bool,
    /// Error category for grouping
    pub category: ErrorCategory,
}

impl AppError {
    /// Create a new application error
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        category: ErrorCategory,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            detail: None,
            retryable: false,
            category,
        }
    }

    /// Add internal detail for logging
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Mark as retryable
    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }

    // =========================================================================
    // Convenience constructors for common errors
    // =========================================================================

    /// Validation error: empty input
    pub fn empty_input(field: &str) -> Self {
        Self::new(
            ErrorCode::VALIDATION_EMPTY_INPUT,
            format!("{} cannot be empty", field),
            ErrorCategory::Validation,
        )
    }

    /// Validation error: invalid format
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::VALIDATION_INVALID_FORMAT,
            message,
            ErrorCategory::Validation,
        )
    }

    /// Not found error: no plant matched the query
    pub fn plant_not_found(query: &str) -> Self {
        Self::new(
            ErrorCode::NOT_FOUND_PLANT,
            format!("No plant found for: {}", query),
            ErrorCategory::NotFound,
        )
    }

    /// Model error: no client configured
    pub fn model_unavailable() -> Self {
        Self::new(
            ErrorCode::MODEL_UNAVAILABLE,
            "Plant identification service is not configured",
            ErrorCategory::Model,
        )
    }

    /// Internal error
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::INTERNAL_ERROR,
            "An internal error occurred",
            ErrorCategory::Internal,
        )
        .with_detail(detail)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

// Convert from the module error types
impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::EmptyInput => Self::empty_input("Input"),
            ValidationError::InputTooLarge { size, max } => Self::new(
                ErrorCode::VALIDATION_INPUT_TOO_LARGE,
                format!("Input too large: {} bytes (max: {} bytes)", size, max),
                ErrorCategory::Validation,
            ),
            ValidationError::InvalidFormat(msg) => Self::invalid_format(msg),
        }
    }
}

impl From<NormalizeError> for AppError {
    fn from(e: NormalizeError) -> Self {
        match e {
            NormalizeError::Malformed(detail) => Self::new(
                ErrorCode::MODEL_MALFORMED_RESPONSE,
                "The plant service returned an unreadable answer - please try again",
                ErrorCategory::Model,
            )
            .with_detail(detail)
            .retryable(),
            NormalizeError::SchemaMismatch(detail) => Self::new(
                ErrorCode::MODEL_SCHEMA_MISMATCH,
                "The plant service returned an unexpected answer - please try again",
                ErrorCategory::Model,
            )
            .with_detail(detail)
            .retryable(),
        }
    }
}

impl From<GeminiError> for AppError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::Timeout => Self::new(
                ErrorCode::NETWORK_TIMEOUT,
                "The plant service timed out",
                ErrorCategory::Network,
            )
            .retryable(),
            GeminiError::RateLimited => Self::new(
                ErrorCode::NETWORK_RATE_LIMITED,
                "Too many requests - try again later",
                ErrorCategory::Network,
            )
            .retryable(),
            GeminiError::AuthFailed => Self::new(
                ErrorCode::MODEL_AUTH_FAILED,
                "Plant service authentication failed",
                ErrorCategory::Model,
            ),
            GeminiError::EmptyResponse => Self::new(
                ErrorCode::MODEL_EMPTY_RESPONSE,
                "The plant service returned no answer - please try again",
                ErrorCategory::Model,
            )
            .retryable(),
            GeminiError::Request(err) => Self::new(
                ErrorCode::NETWORK_CONNECTION_FAILED,
                "Could not reach the plant service",
                ErrorCategory::Network,
            )
            .with_detail(err.to_string())
            .retryable(),
            GeminiError::Api(detail) => Self::new(
                ErrorCode::MODEL_GENERATION_FAILED,
                "The plant service failed to answer",
                ErrorCategory::Model,
            )
            .with_detail(detail)
            .retryable(),
        }
    }
}
