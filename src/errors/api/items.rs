use crate::errors::internal::{InternalError, UploadError};
use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

/// Error response matching the service's response envelope
#[derive(Object, Debug)]
pub struct ItemsErrorResponse {
    /// Always false for errors
    pub success: bool,

    /// Human-readable error message
    pub message: String,
}

/// Item endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ItemsError {
    /// No image file was attached to the submission
    #[oai(status = 400)]
    MissingImages(Json<ItemsErrorResponse>),

    /// Price field did not parse as a finite number
    #[oai(status = 400)]
    InvalidPrice(Json<ItemsErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ItemsErrorResponse>),
}

impl ItemsError {
    /// Create a MissingImages error
    pub fn missing_images() -> Self {
        ItemsError::MissingImages(Json(ItemsErrorResponse {
            success: false,
            message: "Please upload at least one image.".to_string(),
        }))
    }

    /// Create an InvalidPrice error
    pub fn invalid_price(raw: &str) -> Self {
        ItemsError::InvalidPrice(Json(ItemsErrorResponse {
            success: false,
            message: format!("Price must be a valid number, got '{}'.", raw),
        }))
    }

    /// Convert InternalError to ItemsError
    ///
    /// This is the explicit conversion point from internal errors to API
    /// errors. Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Upload(UploadError::CreateDir { path, .. }) => {
                tracing::error!("Upload directory error for {:?}: {}", path, err);
                Self::internal_server_error()
            }
            InternalError::Upload(UploadError::WriteFile { path, .. }) => {
                tracing::error!("Upload write error for {:?}: {}", path, err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    pub fn internal_server_error() -> Self {
        ItemsError::InternalError(Json(ItemsErrorResponse {
            success: false,
            message: "An internal error occurred".to_string(),
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemsError::MissingImages(json) => json.0.message.clone(),
            ItemsError::InvalidPrice(json) => json.0.message.clone(),
            ItemsError::InternalError(json) => json.0.message.clone(),
        }
    }

    /// Get the HTTP status code for the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ItemsError::MissingImages(_) => 400,
            ItemsError::InvalidPrice(_) => 400,
            ItemsError::InternalError(_) => 500,
        }
    }
}

impl fmt::Display for ItemsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
